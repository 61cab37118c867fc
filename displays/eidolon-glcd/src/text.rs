//! Glyph renderer
//!
//! Draws font glyphs through the plane writer. Text does not wrap: glyphs
//! that start past the right or bottom edge are dropped, glyphs that cross it
//! are clipped column by column.

use crate::backend::DisplayController;
use crate::bitmap::Bitmap;
use crate::font::Font;
use crate::geometry::LCD_BOTTOM;
use crate::plane::{Cursor, DrawMode, PlaneWriter};

/// Text renderer on top of a plane writer
pub struct Glcd<'f, C> {
    plane: PlaneWriter<C>,
    font: Option<Font<'f>>,
    mode: DrawMode,
    spacing: i8,
}

impl<'f, C: DisplayController> Glcd<'f, C> {
    /// Create a renderer with no font selected
    pub fn new(controller: C) -> Self {
        Self {
            plane: PlaneWriter::new(controller),
            font: None,
            mode: DrawMode::Set,
            spacing: 0,
        }
    }

    /// Give the controller back
    pub fn release(self) -> C {
        self.plane.release()
    }

    /// Access the plane writer
    pub fn plane(&mut self) -> &mut PlaneWriter<C> {
        &mut self.plane
    }

    /// Initialize the controllers and blank the panel
    pub fn init(&mut self) -> Result<(), C::Error> {
        self.plane.init()?;
        self.plane.clear(0)
    }

    /// Fill the panel with `fill`
    pub fn clear(&mut self, fill: u8) -> Result<(), C::Error> {
        self.plane.clear(fill)
    }

    /// Move the text cursor
    pub fn gotoxy(&mut self, x: u8, y: u8) {
        self.plane.gotoxy(x, y);
    }

    /// Current text cursor
    pub fn cursor(&self) -> Cursor {
        self.plane.cursor()
    }

    /// Select the font, drawing mode and extra columns between glyphs
    pub fn select_font(&mut self, font: Font<'f>, mode: DrawMode, spacing: i8) {
        self.font = Some(font);
        self.mode = mode;
        self.spacing = spacing;
    }

    /// Draw one character at the cursor
    ///
    /// Leaves the cursor at the top of the next character cell.
    pub fn put_char(&mut self, code: u8) -> Result<(), C::Error> {
        let Some(font) = self.font else {
            return Ok(());
        };
        if !self.plane.cursor().is_on_panel() || code < 0x20 {
            return Ok(());
        }
        let Some((location, glyph)) = font.glyph(code) else {
            return Ok(());
        };

        let Cursor { x: x0, y: y0 } = self.plane.cursor();
        let width = location.width as usize;

        for (page, columns) in glyph.chunks(width.max(1)).enumerate() {
            for &byte in columns {
                self.plane.write_column(self.mode.apply(byte))?;
            }

            if page + 1 == location.pages as usize {
                break;
            }
            let next_y = y0 as u16 + (page as u16 + 1) * 8;
            if next_y > LCD_BOTTOM as u16 {
                break;
            }
            self.plane.set_cursor(Cursor::new(x0 as u16, next_y));
        }

        let next_x = (x0 as i16 + location.width as i16 + self.spacing as i16).max(0);
        self.plane.set_cursor(Cursor::new(next_x as u16, y0 as u16));
        Ok(())
    }

    /// Draw a string of single-byte character codes
    pub fn put_str(&mut self, text: &str) -> Result<(), C::Error> {
        for code in text.bytes() {
            self.put_char(code)?;
        }
        Ok(())
    }

    /// Draw a bitmap with its top-left corner at `(x, y)`
    pub fn draw_bitmap(
        &mut self,
        bitmap: &Bitmap<'_>,
        x: u8,
        y: u8,
        mode: DrawMode,
    ) -> Result<(), C::Error> {
        self.plane.draw_bitmap(bitmap, x, y, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LCD_RIGHT;
    use crate::mock::MockController;

    // '!' and '"', 3 columns, 16 rows
    const TALL: [u8; 6 + 2 * 6] = [
        0, 0, 3, 16, b'!', b'"', //
        0x01, 0x02, 0x03, 0x10, 0x20, 0x30, //
        0x04, 0x05, 0x06, 0x40, 0x50, 0x60,
    ];

    // ' ' and 'A', variable width 1 and 2, 7 rows
    const NARROW: [u8; 6 + 2 + 3] = [0, 0, 0, 7, b' ', b'A', 1, 2, 0x00, 0x7F, 0x7E];

    fn glcd() -> Glcd<'static, MockController> {
        Glcd::new(MockController::new())
    }

    #[test]
    fn test_put_char_streams_pages() {
        let mut lcd = glcd();
        lcd.select_font(Font::parse(&TALL).unwrap(), DrawMode::Set, 1);
        lcd.gotoxy(10, 0);
        lcd.put_char(b'"').unwrap();

        let mock = lcd.plane().controller();
        assert_eq!(mock.byte_at(10, 0), 0x04);
        assert_eq!(mock.byte_at(12, 0), 0x06);
        assert_eq!(mock.byte_at(10, 1), 0x40);
        assert_eq!(mock.byte_at(12, 1), 0x60);
        assert_eq!(lcd.cursor(), Cursor { x: 14, y: 0 });
    }

    #[test]
    fn test_put_char_stops_at_bottom() {
        let mut lcd = glcd();
        lcd.select_font(Font::parse(&TALL).unwrap(), DrawMode::Set, 0);
        lcd.gotoxy(0, 24);
        lcd.put_char(b'!').unwrap();

        let mock = lcd.plane().controller();
        assert_eq!(mock.writes(), 3);
        assert_eq!(mock.byte_at(0, 3), 0x01);
        assert_eq!(lcd.cursor(), Cursor { x: 3, y: 24 });
    }

    #[test]
    fn test_ignored_codes() {
        let mut lcd = glcd();
        lcd.put_char(b'A').unwrap();

        lcd.select_font(Font::parse(&NARROW).unwrap(), DrawMode::Set, 0);
        lcd.put_char(0x1F).unwrap();
        lcd.put_char(b'B').unwrap();

        lcd.gotoxy(LCD_RIGHT, 0);
        lcd.put_char(b'A').unwrap();
        lcd.put_char(b'A').unwrap();

        // Only the first 'A' at the right edge reaches the panel
        let mock = lcd.plane().controller();
        assert_eq!(mock.writes(), 1);
        assert_eq!(mock.byte_at(LCD_RIGHT, 0), 0x7F);
        assert_eq!(lcd.cursor().x, LCD_RIGHT + 1);
    }

    #[test]
    fn test_put_str_variable_width() {
        let mut lcd = glcd();
        lcd.select_font(Font::parse(&NARROW).unwrap(), DrawMode::Set, 1);
        lcd.gotoxy(0, 8);
        lcd.put_str("A A").unwrap();

        let mock = lcd.plane().controller();
        assert_eq!(mock.byte_at(0, 1), 0x7F);
        assert_eq!(mock.byte_at(1, 1), 0x7E);
        assert_eq!(mock.byte_at(3, 1), 0x00);
        assert_eq!(mock.byte_at(5, 1), 0x7F);
        assert_eq!(lcd.cursor(), Cursor { x: 8, y: 8 });
    }

    #[test]
    fn test_invert_mode() {
        let mut lcd = glcd();
        lcd.select_font(Font::parse(&NARROW).unwrap(), DrawMode::Invert, 0);
        lcd.put_char(b'A').unwrap();

        let mock = lcd.plane().controller();
        assert_eq!(mock.byte_at(0, 0), 0x80);
        assert_eq!(mock.byte_at(1, 0), 0x81);
    }

    #[test]
    fn test_negative_spacing_overlaps() {
        let mut lcd = glcd();
        lcd.select_font(Font::parse(&NARROW).unwrap(), DrawMode::Set, -1);
        lcd.gotoxy(0, 0);
        lcd.put_char(b'A').unwrap();
        assert_eq!(lcd.cursor().x, 1);

        lcd.gotoxy(0, 0);
        lcd.select_font(Font::parse(&NARROW).unwrap(), DrawMode::Set, -5);
        lcd.put_char(b'A').unwrap();
        assert_eq!(lcd.cursor().x, 0);
    }
}
