//! Annunciator row
//!
//! Twelve indicators under the digits, one bit each. The instrument sends
//! the top-right annunciator first, so the left-most position is bit 11.

/// Annunciators on the instrument display
pub const ANNUNCIATOR_COUNT: usize = 12;

/// Down-pointing triangle in the system font
pub const ANNUNCIATOR_GLYPH: u8 = 127;

/// Annunciator bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnnunciatorMask(pub u16);

impl AnnunciatorMask {
    /// Every annunciator lit
    pub const ALL: Self = Self(0x0FFF);

    /// Build from the two annunciator register bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        let high = data.first().copied().unwrap_or(0) as u16;
        let low = data.get(1).copied().unwrap_or(0) as u16;
        Self((high << 8) | low)
    }

    /// True when the annunciator at `position` (0 = left) is lit
    pub fn is_lit(&self, position: usize) -> bool {
        position < ANNUNCIATOR_COUNT && self.0 & (1 << (ANNUNCIATOR_COUNT - 1 - position)) != 0
    }

    /// System font character for `position`
    pub fn glyph(&self, position: usize) -> u8 {
        if self.is_lit(position) {
            ANNUNCIATOR_GLYPH
        } else {
            b' '
        }
    }

    /// Characters for the whole row, left to right
    pub fn glyphs(&self) -> [u8; ANNUNCIATOR_COUNT] {
        core::array::from_fn(|position| self.glyph(position))
    }
}
