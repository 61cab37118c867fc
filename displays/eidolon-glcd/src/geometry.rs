//! Panel geometry
//!
//! The 202 visible columns are split across three controllers:
//!
//! ```text
//! x:   0 ........ 60 | 61 ........ 140 | 141 ........ 201
//!      chip 1 (61)   | chip 2 (80)     | chip 3 (61)
//! ```

use eidolon_hal::lcd::ChipSelect;

/// Right-most pixel column
pub const LCD_RIGHT: u8 = 201;
/// Bottom-most pixel row
pub const LCD_BOTTOM: u8 = 31;
/// Visible columns
pub const LCD_WIDTH: u8 = LCD_RIGHT + 1;
/// Visible rows
pub const LCD_HEIGHT: u8 = LCD_BOTTOM + 1;
/// Number of 8-row pages
pub const LCD_PAGES: u8 = LCD_HEIGHT / 8;

/// Column RAM of one controller
pub const CHIP_COLUMNS: u8 = 80;

/// First column owned by chip 2
pub const CHIP2_START_X: u8 = 61;
/// First column owned by chip 3
pub const CHIP3_START_X: u8 = 141;

/// One of the three column controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chip {
    /// Left, columns 0..=60
    One,
    /// Middle, columns 61..=140
    Two,
    /// Right, columns 141..=201
    Three,
}

impl Chip {
    /// All controllers, left to right
    pub const ALL: [Chip; 3] = [Chip::One, Chip::Two, Chip::Three];

    /// Zero-based controller index
    pub const fn index(self) -> usize {
        match self {
            Chip::One => 0,
            Chip::Two => 1,
            Chip::Three => 2,
        }
    }

    /// First panel column owned by this controller
    pub const fn start_x(self) -> u8 {
        match self {
            Chip::One => 0,
            Chip::Two => CHIP2_START_X,
            Chip::Three => CHIP3_START_X,
        }
    }

    /// Number of panel columns owned by this controller
    pub const fn width(self) -> u8 {
        match self {
            Chip::One => CHIP2_START_X,
            Chip::Two => CHIP3_START_X - CHIP2_START_X,
            Chip::Three => LCD_WIDTH - CHIP3_START_X,
        }
    }

    /// Enable strobe for this controller
    pub const fn select(self) -> ChipSelect {
        ChipSelect::single(self.index())
    }
}

/// Map a panel column to its controller and controller-local column
///
/// Returns `None` past the right edge.
pub fn resolve_chip(x: u8) -> Option<(Chip, u8)> {
    let chip = match x {
        0..CHIP2_START_X => Chip::One,
        CHIP2_START_X..CHIP3_START_X => Chip::Two,
        CHIP3_START_X..=LCD_RIGHT => Chip::Three,
        _ => return None,
    };
    Some((chip, x - chip.start_x()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_region_boundaries() {
        assert_eq!(resolve_chip(0), Some((Chip::One, 0)));
        assert_eq!(resolve_chip(60), Some((Chip::One, 60)));
        assert_eq!(resolve_chip(61), Some((Chip::Two, 0)));
        assert_eq!(resolve_chip(140), Some((Chip::Two, 79)));
        assert_eq!(resolve_chip(141), Some((Chip::Three, 0)));
        assert_eq!(resolve_chip(201), Some((Chip::Three, 60)));
        assert_eq!(resolve_chip(202), None);
    }

    #[test]
    fn test_widths_cover_panel() {
        let total: u16 = Chip::ALL.iter().map(|c| c.width() as u16).sum();
        assert_eq!(total, LCD_WIDTH as u16);
        for chip in Chip::ALL {
            assert!(chip.width() <= CHIP_COLUMNS);
        }
    }

    #[test]
    fn test_chip_select_matches_index() {
        assert_eq!(Chip::One.select(), ChipSelect::CHIP1);
        assert_eq!(Chip::Two.select(), ChipSelect::CHIP2);
        assert_eq!(Chip::Three.select(), ChipSelect::CHIP3);
    }

    proptest! {
        #[test]
        fn test_resolution_is_a_partition(x in 0u8..=LCD_RIGHT) {
            let (chip, local) = resolve_chip(x).unwrap();
            prop_assert!(local < chip.width());
            prop_assert_eq!(chip.start_x() + local, x);

            // No other region claims x
            let owners = Chip::ALL
                .iter()
                .filter(|c| x >= c.start_x() && x - c.start_x() < c.width())
                .count();
            prop_assert_eq!(owners, 1);
        }

        #[test]
        fn test_past_right_edge_unresolved(x in LCD_WIDTH..=u8::MAX) {
            prop_assert_eq!(resolve_chip(x), None);
        }
    }
}
