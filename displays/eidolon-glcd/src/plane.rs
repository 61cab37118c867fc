//! Pixel plane writer
//!
//! Writes vertical 8-pixel columns at any row. The controllers are addressed
//! in pages, so a column that starts mid-page is split over two pages and
//! merged into what is already on the panel.

use crate::backend::DisplayController;
use crate::bitmap::Bitmap;
use crate::geometry::{resolve_chip, Chip, LCD_BOTTOM, LCD_RIGHT};

/// Drawing mode for glyphs and bitmaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawMode {
    /// Pixels as stored
    #[default]
    Set,
    /// Blank columns over the drawn area
    Clear,
    /// Inverted pixels
    Invert,
}

impl DrawMode {
    /// Apply the mode to one column byte
    pub fn apply(self, byte: u8) -> u8 {
        match self {
            DrawMode::Set => byte,
            DrawMode::Clear => 0,
            DrawMode::Invert => !byte,
        }
    }
}

/// Write position in panel pixels
///
/// May sit one past the right or bottom edge. Column writes there are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Column, 0..=202
    pub x: u8,
    /// Row, 0..=32
    pub y: u8,
}

impl Cursor {
    /// Cursor at `(x, y)`, parked one past the edge if further out
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x: x.min(LCD_RIGHT as u16 + 1) as u8,
            y: y.min(LCD_BOTTOM as u16 + 1) as u8,
        }
    }

    /// True when a column write here reaches the panel
    pub fn is_on_panel(&self) -> bool {
        self.x <= LCD_RIGHT && self.y <= LCD_BOTTOM
    }
}

/// Frame-buffer-less column writer
///
/// Tracks where the controllers are addressed so that consecutive writes
/// only issue a column-set when the target chip or column changes.
pub struct PlaneWriter<C> {
    controller: C,
    cursor: Cursor,
    column: Option<(Chip, u8)>,
    page: Option<u8>,
}

impl<C: DisplayController> PlaneWriter<C> {
    /// Wrap a controller, cursor at the origin
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            cursor: Cursor::default(),
            column: None,
            page: None,
        }
    }

    /// Give the controller back
    pub fn release(self) -> C {
        self.controller
    }

    /// Access the controller
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Initialize the controllers
    pub fn init(&mut self) -> Result<(), C::Error> {
        self.controller.init()?;
        self.forget_address();
        Ok(())
    }

    /// Fill the whole panel with `fill`
    pub fn clear(&mut self, fill: u8) -> Result<(), C::Error> {
        self.controller.fill(fill)?;
        self.forget_address();
        Ok(())
    }

    fn forget_address(&mut self) {
        self.column = None;
        self.page = None;
    }

    /// Current write position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the write position
    pub fn gotoxy(&mut self, x: u8, y: u8) {
        self.cursor = Cursor::new(x as u16, y as u16);
    }

    pub(crate) fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    /// Address the controller owning column `x` at `page`
    fn seek(&mut self, x: u8, page: u8) -> Result<Option<(Chip, u8)>, C::Error> {
        let Some((chip, column)) = resolve_chip(x) else {
            return Ok(None);
        };
        if self.column != Some((chip, column)) {
            self.controller.set_column(chip, column)?;
            self.column = Some((chip, column));
        }
        if self.page != Some(page) {
            self.controller.set_page(page)?;
            self.page = Some(page);
        }
        Ok(Some((chip, column)))
    }

    /// Read the RAM byte at column `x` of `page`
    ///
    /// Returns 0 past the right edge.
    pub fn read_page(&mut self, x: u8, page: u8) -> Result<u8, C::Error> {
        match self.seek(x, page)? {
            Some((chip, _)) => self.controller.read_data(chip),
            None => Ok(0),
        }
    }

    /// Write the RAM byte at column `x` of `page`
    pub fn write_page(&mut self, x: u8, page: u8, byte: u8) -> Result<(), C::Error> {
        if let Some((chip, column)) = self.seek(x, page)? {
            self.controller.write_data(chip, byte)?;
            self.column = Some((chip, column + 1));
        }
        Ok(())
    }

    /// Write one 8-pixel column with its top pixel at the cursor
    ///
    /// Moves the cursor one column right. Rows past the bottom edge are
    /// clipped.
    pub fn write_column(&mut self, byte: u8) -> Result<(), C::Error> {
        if !self.cursor.is_on_panel() {
            return Ok(());
        }

        let Cursor { x, y } = self.cursor;
        let page = y / 8;
        let offset = y % 8;

        if offset == 0 {
            self.write_page(x, page, byte)?;
        } else {
            let upper = self.read_page(x, page)? | (byte << offset);
            self.write_page(x, page, upper)?;

            if y + 8 <= LCD_BOTTOM {
                let lower = self.read_page(x, page + 1)? | (byte >> (8 - offset));
                self.write_page(x, page + 1, lower)?;
            }
        }

        self.cursor = Cursor::new(x as u16 + 1, y as u16);
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
        if x > LCD_RIGHT || y > LCD_BOTTOM {
            return Ok(());
        }

        for page in 0..bitmap.pages() {
            self.cursor = Cursor::new(x as u16, y as u16 + page as u16 * 8);
            for &byte in bitmap.page(page) {
                self.write_column(mode.apply(byte))?;
            }
        }
        Ok(())
    }
}
