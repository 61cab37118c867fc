//! Punctuation after each digit

/// Punctuation mark following a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Punctuation {
    /// Nothing after the digit
    #[default]
    None,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
}

impl Punctuation {
    /// Decode the punctuation of digit `index` from its register B byte
    ///
    /// Even digits use bits 7:6, odd digits bits 3:2.
    pub fn decode(b: u8, index: usize) -> Self {
        let masked = if index % 2 == 0 { b & 0xC0 } else { b & 0x0C };
        Self::from_masked(masked)
    }

    /// Map an already masked register B value
    pub fn from_masked(masked: u8) -> Self {
        match masked {
            0x40 | 0x04 => Punctuation::Dot,
            0x80 | 0x08 => Punctuation::Colon,
            0xC0 | 0x0C => Punctuation::Comma,
            _ => Punctuation::None,
        }
    }

    /// Character code in the punctuation font
    pub fn glyph(self) -> u8 {
        match self {
            Punctuation::None => 32,
            Punctuation::Comma => 33,
            Punctuation::Dot => 34,
            Punctuation::Colon => 35,
        }
    }

    /// ASCII rendering, for logs
    pub fn as_char(self) -> Option<char> {
        match self {
            Punctuation::None => None,
            Punctuation::Comma => Some(','),
            Punctuation::Dot => Some('.'),
            Punctuation::Colon => Some(':'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_values() {
        assert_eq!(Punctuation::from_masked(0x40), Punctuation::Dot);
        assert_eq!(Punctuation::from_masked(0x04), Punctuation::Dot);
        assert_eq!(Punctuation::from_masked(0x08), Punctuation::Colon);
        assert_eq!(Punctuation::from_masked(0x80), Punctuation::Colon);
        assert_eq!(Punctuation::from_masked(0xC0), Punctuation::Comma);
        assert_eq!(Punctuation::from_masked(0x0C), Punctuation::Comma);
        assert_eq!(Punctuation::from_masked(0x00), Punctuation::None);
    }

    #[test]
    fn test_decode_masks_by_parity() {
        // 0x4C: even digit sees 0x40, odd digit sees 0x0C
        assert_eq!(Punctuation::decode(0x4C, 0), Punctuation::Dot);
        assert_eq!(Punctuation::decode(0x4C, 1), Punctuation::Comma);
        // Digit code bits never leak into punctuation
        assert_eq!(Punctuation::decode(0x33, 2), Punctuation::None);
        assert_eq!(Punctuation::decode(0x33, 3), Punctuation::None);
    }

    #[test]
    fn test_glyph_codes() {
        assert_eq!(Punctuation::None.glyph(), b' ');
        assert_eq!(Punctuation::Comma.glyph(), 33);
        assert_eq!(Punctuation::Dot.glyph(), 34);
        assert_eq!(Punctuation::Colon.glyph(), 35);
    }
}
