//! Bitmap resources
//!
//! `[width, height, data...]` with `height` a multiple of 8. Data is page by
//! page, one byte per column, LSB at the top.

/// Bitmap resource errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitmapError {
    /// Missing width/height header
    TooShort,
    /// Height is not a whole number of pages
    UnalignedHeight,
    /// Fewer data bytes than width x pages
    Truncated,
}

/// Validated bitmap resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    width: u8,
    height: u8,
    data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Parse and validate a bitmap resource
    pub fn parse(resource: &'a [u8]) -> Result<Self, BitmapError> {
        let [width, height, data @ ..] = resource else {
            return Err(BitmapError::TooShort);
        };
        if height % 8 != 0 {
            return Err(BitmapError::UnalignedHeight);
        }

        let len = *width as usize * (*height / 8) as usize;
        let data = data.get(..len).ok_or(BitmapError::Truncated)?;

        Ok(Self {
            width: *width,
            height: *height,
            data,
        })
    }

    /// Width in columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Height in pages
    pub fn pages(&self) -> u8 {
        self.height / 8
    }

    /// Column bytes of one page
    pub fn page(&self, page: u8) -> &'a [u8] {
        let width = self.width as usize;
        let start = page as usize * width;
        self.data.get(start..start + width).unwrap_or(&[])
    }
}
