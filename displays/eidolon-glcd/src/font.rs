//! Packed column-major font resources
//!
//! Layout:
//! ```text
//! [0..2]  data size (unused)
//! [2]     fixed glyph width, 0 for variable width
//! [3]     glyph height in pixels
//! [4]     first character
//! [5]     last character
//! [6..]   width table (variable width only, one byte per character)
//! [...]   glyph data, page by page, one byte per column
//! ```

/// Offset of the width table, and of the glyph data in fixed-width fonts
pub const FONT_HEADER_LEN: usize = 6;

const FIXED_WIDTH: usize = 2;
const HEIGHT: usize = 3;
const FIRST_CHAR: usize = 4;
const LAST_CHAR: usize = 5;

/// Font resource errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Shorter than the header
    TooShort,
    /// Last character before first character
    InvalidRange,
    /// Zero glyph height
    InvalidHeight,
    /// Variable-width font without a complete width table
    MissingWidthTable,
    /// Glyph data shorter than the header describes
    Truncated,
}

/// Where a glyph sits inside the font resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphLocation {
    /// Byte offset of the first column of page 0
    pub offset: usize,
    /// Width in columns
    pub width: u8,
    /// Height in 8-row pages
    pub pages: u8,
}

impl GlyphLocation {
    /// Number of data bytes in the glyph
    pub fn len(&self) -> usize {
        self.width as usize * self.pages as usize
    }

    /// True for zero-width glyphs
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validated font resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font<'a> {
    data: &'a [u8],
    fixed_width: u8,
    height: u8,
    first: u8,
    last: u8,
}

impl<'a> Font<'a> {
    /// Parse and validate a font resource
    pub fn parse(data: &'a [u8]) -> Result<Self, FontError> {
        if data.len() < FONT_HEADER_LEN {
            return Err(FontError::TooShort);
        }

        let font = Self {
            data,
            fixed_width: data[FIXED_WIDTH],
            height: data[HEIGHT],
            first: data[FIRST_CHAR],
            last: data[LAST_CHAR],
        };

        if font.first > font.last {
            return Err(FontError::InvalidRange);
        }
        if font.height == 0 {
            return Err(FontError::InvalidHeight);
        }

        let count = font.char_count();
        let pages = font.pages() as usize;
        let required = if font.is_fixed_width() {
            FONT_HEADER_LEN + count * pages * font.fixed_width as usize
        } else {
            let table_end = FONT_HEADER_LEN + count;
            if data.len() < table_end {
                return Err(FontError::MissingWidthTable);
            }
            let columns: usize = data[FONT_HEADER_LEN..table_end]
                .iter()
                .map(|&w| w as usize)
                .sum();
            table_end + columns * pages
        };

        if data.len() < required {
            return Err(FontError::Truncated);
        }

        Ok(font)
    }

    /// True when every glyph has the same width
    pub fn is_fixed_width(&self) -> bool {
        self.fixed_width > 0
    }

    /// Glyph height in pixels
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Glyph height in 8-row pages
    pub fn pages(&self) -> u8 {
        self.height.div_ceil(8)
    }

    /// First character code
    pub fn first_char(&self) -> u8 {
        self.first
    }

    /// Last character code
    pub fn last_char(&self) -> u8 {
        self.last
    }

    /// Number of characters in the font
    pub fn char_count(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// True when `code` has a glyph
    pub fn contains(&self, code: u8) -> bool {
        (self.first..=self.last).contains(&code)
    }

    /// Locate the glyph for `code`
    ///
    /// Variable-width fonts carry no offset table, so the widths of every
    /// preceding glyph are summed on each call.
    pub fn locate(&self, code: u8) -> Option<GlyphLocation> {
        if !self.contains(code) {
            return None;
        }

        let index = (code - self.first) as usize;
        let pages = self.pages();

        let (offset, width) = if self.is_fixed_width() {
            let width = self.fixed_width;
            (
                index * pages as usize * width as usize + FONT_HEADER_LEN,
                width,
            )
        } else {
            let widths = &self.data[FONT_HEADER_LEN..FONT_HEADER_LEN + self.char_count()];
            let preceding: usize = widths[..index].iter().map(|&w| w as usize).sum();
            (
                preceding * pages as usize + self.char_count() + FONT_HEADER_LEN,
                widths[index],
            )
        };

        Some(GlyphLocation {
            offset,
            width,
            pages,
        })
    }

    /// Glyph data for `code`, page 0 first
    pub fn glyph(&self, code: u8) -> Option<(GlyphLocation, &'a [u8])> {
        let location = self.locate(code)?;
        let bytes = self
            .data
            .get(location.offset..location.offset + location.len())?;
        Some((location, bytes))
    }
}

/// Byte length of the font [`magnify`] builds from `source`
pub const fn magnified_len(source: &[u8], cell_width: u8, scale_y: u8) -> usize {
    let count = (source[LAST_CHAR] - source[FIRST_CHAR]) as usize + 1;
    let pages = (source[HEIGHT] as usize * scale_y as usize).div_ceil(8);
    FONT_HEADER_LEN + count * pages * cell_width as usize
}

/// Build a large fixed-width font from a single-page fixed-width one
///
/// Columns are stretched to `glyph_width` by nearest neighbour and padded
/// with blank columns up to `cell_width`. Rows are repeated `scale_y`
/// times. Meant for const evaluation, so bad input fails the build.
pub const fn magnify<const N: usize>(
    source: &[u8],
    glyph_width: u8,
    cell_width: u8,
    scale_y: u8,
) -> [u8; N] {
    let src_width = source[FIXED_WIDTH] as usize;
    let src_height = source[HEIGHT] as usize;
    assert!(src_width > 0 && src_height <= 8);
    assert!(glyph_width <= cell_width);

    let height = src_height * scale_y as usize;
    assert!(height <= 32);
    let pages = height.div_ceil(8);
    let cell = cell_width as usize;
    let count = (source[LAST_CHAR] - source[FIRST_CHAR]) as usize + 1;
    assert!(N == magnified_len(source, cell_width, scale_y));

    let mut font = [0u8; N];
    font[FIXED_WIDTH] = cell_width;
    font[HEIGHT] = height as u8;
    font[FIRST_CHAR] = source[FIRST_CHAR];
    font[LAST_CHAR] = source[LAST_CHAR];

    let mut glyph = 0;
    while glyph < count {
        let mut x = 0;
        while x < glyph_width as usize {
            let src_x = x * src_width / glyph_width as usize;
            let column = source[FONT_HEADER_LEN + glyph * src_width + src_x];

            let mut tall: u32 = 0;
            let mut row = 0;
            while row < src_height {
                if column & (1 << row) != 0 {
                    let mut dy = 0;
                    while dy < scale_y as usize {
                        tall |= 1 << (row * scale_y as usize + dy);
                        dy += 1;
                    }
                }
                row += 1;
            }

            let mut page = 0;
            while page < pages {
                font[FONT_HEADER_LEN + (glyph * pages + page) * cell + x] = (tall >> (page * 8)) as u8;
                page += 1;
            }
            x += 1;
        }
        glyph += 1;
    }

    font
}
