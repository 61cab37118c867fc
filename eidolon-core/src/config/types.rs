//! Configuration type definitions

use eidolon_glcd::{DrawMode, LCD_BOTTOM, LCD_RIGHT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Readout row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    /// Digit characters
    Digits,
    /// Punctuation marks
    Punctuation,
    /// Annunciator markers
    Annunciators,
}

/// Placement of one readout row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowLayout {
    /// Left edge of the first glyph
    pub x: u8,
    /// Top row of the glyphs
    pub y: u8,
    /// Extra columns between glyphs, may be negative
    #[cfg_attr(feature = "serde", serde(default))]
    pub spacing: i8,
}

impl RowLayout {
    /// Row starting at (`x`, `y`)
    pub const fn new(x: u8, y: u8, spacing: i8) -> Self {
        Self { x, y, spacing }
    }
}

/// Placement of the three readout rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelLayout {
    /// The twelve digit characters
    pub digits: RowLayout,
    /// Mark following each digit
    pub punctuation: RowLayout,
    /// The twelve annunciator markers
    pub annunciators: RowLayout,
    /// Drawing mode for all rows
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: DrawMode,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PanelLayout {
    /// Layout matching the instrument's own display
    pub const DEFAULT: Self = Self {
        digits: RowLayout::new(0, 8, 0),
        punctuation: RowLayout::new(14, 16, 15),
        annunciators: RowLayout::new(4, 24, 12),
        mode: DrawMode::Set,
    };

    /// Layout of a row
    pub fn row(&self, row: Row) -> &RowLayout {
        match row {
            Row::Digits => &self.digits,
            Row::Punctuation => &self.punctuation,
            Row::Annunciators => &self.annunciators,
        }
    }

    /// Check that every row starts on the panel
    pub fn validate(&self) -> Result<(), ConfigError> {
        for row in [Row::Digits, Row::Punctuation, Row::Annunciators] {
            let layout = self.row(row);
            if layout.x > LCD_RIGHT || layout.y > LCD_BOTTOM {
                return Err(ConfigError::RowOffPanel(row));
            }
        }
        Ok(())
    }
}

/// Boot screen durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BootTiming {
    /// All segments lit
    pub lamp_test_ms: u32,
    /// Logo and model text
    pub splash_ms: u32,
}

impl Default for BootTiming {
    fn default() -> Self {
        Self {
            lamp_test_ms: 500,
            splash_ms: 1000,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    pub layout: PanelLayout,
    #[cfg_attr(feature = "serde", serde(default))]
    pub boot: BootTiming,
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Row origin past the right or bottom edge
    RowOffPanel(Row),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = PanelLayout::default();
        assert_eq!(layout.digits, RowLayout::new(0, 8, 0));
        assert_eq!(layout.punctuation, RowLayout::new(14, 16, 15));
        assert_eq!(layout.annunciators, RowLayout::new(4, 24, 12));
        assert_eq!(layout.mode, DrawMode::Set);
        assert_eq!(layout.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_off_panel_rows() {
        let mut layout = PanelLayout::default();
        layout.annunciators.y = 32;
        assert_eq!(layout.validate(), Err(ConfigError::RowOffPanel(Row::Annunciators)));

        let mut layout = PanelLayout::default();
        layout.digits.x = 202;
        assert_eq!(layout.validate(), Err(ConfigError::RowOffPanel(Row::Digits)));
    }

    #[test]
    fn test_default_boot_timing() {
        let boot = BootTiming::default();
        assert_eq!(boot.lamp_test_ms, 500);
        assert_eq!(boot.splash_ms, 1000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_from_toml() {
        let config: PanelConfig = toml::from_str(
            r#"
            [layout]
            mode = "Invert"
            digits = { x = 2, y = 8 }
            punctuation = { x = 16, y = 16, spacing = 15 }
            annunciators = { x = 4, y = 24, spacing = 12 }
            "#,
        )
        .unwrap();

        assert_eq!(config.layout.digits, RowLayout::new(2, 8, 0));
        assert_eq!(config.layout.mode, DrawMode::Invert);
        assert_eq!(config.boot, BootTiming::default());
    }
}
