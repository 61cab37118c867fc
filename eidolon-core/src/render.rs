//! Panel renderer
//!
//! Draws a decoded readout in three rows: 12 digits, the punctuation marks
//! between them and the annunciator triangles underneath. Rows are drawn
//! over what is already on the panel, there is no clear between updates.

use eidolon_glcd::{Bitmap, DisplayController, DrawMode, Font, Glcd};

use crate::config::{PanelLayout, RowLayout};
use crate::decode::{AnnunciatorMask, Punctuation, Readout, DIGIT_COUNT};

/// Model text next to the logo on the splash screen
pub const MODEL_LINES: [&str; 2] = ["6060B    3-60V/0-60A 300W", "SYSTEM DC ELECTRONIC LOAD"];

/// Top-left of the first model line; the second goes one page lower
const MODEL_TEXT_X: u8 = 53;
const MODEL_TEXT_Y: u8 = 8;
const MODEL_TEXT_SPACING: i8 = 1;

/// Fonts used on the panel
#[derive(Debug, Clone, Copy)]
pub struct PanelFonts<'f> {
    /// Large digit font
    pub digits: Font<'f>,
    /// Comma, dot and colon at codes 33..=35
    pub punctuation: Font<'f>,
    /// Small text font with the annunciator triangle at 127
    pub system: Font<'f>,
}

/// Draws readouts and boot screens
pub struct PanelRenderer<'f> {
    fonts: PanelFonts<'f>,
    layout: PanelLayout,
}

impl<'f> PanelRenderer<'f> {
    /// Create a renderer
    pub fn new(fonts: PanelFonts<'f>, layout: PanelLayout) -> Self {
        Self { fonts, layout }
    }

    /// Draw a full readout
    pub fn render<C: DisplayController>(
        &self,
        glcd: &mut Glcd<'f, C>,
        readout: &Readout,
    ) -> Result<(), C::Error> {
        self.render_digits(glcd, &readout.digits)?;
        self.render_punctuation(glcd, &readout.punctuation)?;
        self.render_annunciators(glcd, readout.annunciators)
    }

    /// Draw the digit row
    pub fn render_digits<C: DisplayController>(
        &self,
        glcd: &mut Glcd<'f, C>,
        digits: &[u8; DIGIT_COUNT],
    ) -> Result<(), C::Error> {
        self.draw_row(glcd, self.fonts.digits, &self.layout.digits, digits.iter().copied())
    }

    /// Draw the punctuation row
    pub fn render_punctuation<C: DisplayController>(
        &self,
        glcd: &mut Glcd<'f, C>,
        punctuation: &[Punctuation; DIGIT_COUNT],
    ) -> Result<(), C::Error> {
        self.draw_row(
            glcd,
            self.fonts.punctuation,
            &self.layout.punctuation,
            punctuation.iter().map(|p| p.glyph()),
        )
    }

    /// Draw the annunciator row
    pub fn render_annunciators<C: DisplayController>(
        &self,
        glcd: &mut Glcd<'f, C>,
        mask: AnnunciatorMask,
    ) -> Result<(), C::Error> {
        self.draw_row(
            glcd,
            self.fonts.system,
            &self.layout.annunciators,
            mask.glyphs().into_iter(),
        )
    }

    fn draw_row<C: DisplayController>(
        &self,
        glcd: &mut Glcd<'f, C>,
        font: Font<'f>,
        row: &RowLayout,
        codes: impl Iterator<Item = u8>,
    ) -> Result<(), C::Error> {
        glcd.select_font(font, self.layout.mode, row.spacing);
        glcd.gotoxy(row.x, row.y);
        for code in codes {
            glcd.put_char(code)?;
        }
        Ok(())
    }

    /// Blank panel with every digit and annunciator lit
    pub fn render_lamp_test<C: DisplayController>(
        &self,
        glcd: &mut Glcd<'f, C>,
    ) -> Result<(), C::Error> {
        let lamp = Readout::lamp_test();
        glcd.clear(0)?;
        self.render_digits(glcd, &lamp.digits)?;
        self.render_annunciators(glcd, lamp.annunciators)
    }

    /// Logo in the top-left corner with the model text beside it
    pub fn render_splash<C: DisplayController>(
        &self,
        glcd: &mut Glcd<'f, C>,
        logo: &Bitmap<'_>,
    ) -> Result<(), C::Error> {
        glcd.clear(0)?;
        glcd.draw_bitmap(logo, 0, 0, DrawMode::Set)?;

        glcd.select_font(self.fonts.system, DrawMode::Set, MODEL_TEXT_SPACING);
        for (line, text) in MODEL_LINES.iter().enumerate() {
            glcd.gotoxy(MODEL_TEXT_X, MODEL_TEXT_Y + line as u8 * 8);
            glcd.put_str(text)?;
        }
        Ok(())
    }
}
