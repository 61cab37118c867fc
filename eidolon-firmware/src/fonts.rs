//! Font and bitmap resources
//!
//! All resources live in flash. The large digit font is generated from the
//! system font at compile time.

use eidolon_core::PanelFonts;
use eidolon_glcd::{magnified_len, magnify, Bitmap, BitmapError, Font, FontError};

const SYSTEM_5X7_LEN: usize = 6 + 96 * 5;

/// 5x7 fixed-width system font, space to 0x7F
///
/// 0x7F is the downward triangle used for annunciators.
pub static SYSTEM_5X7: [u8; SYSTEM_5X7_LEN] = SYSTEM_5X7_DATA;

const SYSTEM_5X7_DATA: [u8; SYSTEM_5X7_LEN] = [
    0x00, 0x00, // size (unused)
    5,    // width
    7,    // height
    0x20, // first char
    0x7F, // last char
    0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x5F, 0x00, 0x00, // !
    0x00, 0x07, 0x00, 0x07, 0x00, // "
    0x14, 0x7F, 0x14, 0x7F, 0x14, // #
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // $
    0x23, 0x13, 0x08, 0x64, 0x62, // %
    0x36, 0x49, 0x55, 0x22, 0x50, // &
    0x00, 0x05, 0x03, 0x00, 0x00, // '
    0x00, 0x1C, 0x22, 0x41, 0x00, // (
    0x00, 0x41, 0x22, 0x1C, 0x00, // )
    0x08, 0x2A, 0x1C, 0x2A, 0x08, // *
    0x08, 0x08, 0x3E, 0x08, 0x08, // +
    0x00, 0x50, 0x30, 0x00, 0x00, // ,
    0x08, 0x08, 0x08, 0x08, 0x08, // -
    0x00, 0x60, 0x60, 0x00, 0x00, // .
    0x20, 0x10, 0x08, 0x04, 0x02, // /
    0x3E, 0x51, 0x49, 0x45, 0x3E, // 0
    0x00, 0x42, 0x7F, 0x40, 0x00, // 1
    0x42, 0x61, 0x51, 0x49, 0x46, // 2
    0x21, 0x41, 0x45, 0x4B, 0x31, // 3
    0x18, 0x14, 0x12, 0x7F, 0x10, // 4
    0x27, 0x45, 0x45, 0x45, 0x39, // 5
    0x3C, 0x4A, 0x49, 0x49, 0x30, // 6
    0x01, 0x71, 0x09, 0x05, 0x03, // 7
    0x36, 0x49, 0x49, 0x49, 0x36, // 8
    0x06, 0x49, 0x49, 0x29, 0x1E, // 9
    0x00, 0x36, 0x36, 0x00, 0x00, // :
    0x00, 0x56, 0x36, 0x00, 0x00, // ;
    0x08, 0x14, 0x22, 0x41, 0x00, // <
    0x14, 0x14, 0x14, 0x14, 0x14, // =
    0x00, 0x41, 0x22, 0x14, 0x08, // >
    0x02, 0x01, 0x51, 0x09, 0x06, // ?
    0x32, 0x49, 0x79, 0x41, 0x3E, // @
    0x7E, 0x11, 0x11, 0x11, 0x7E, // A
    0x7F, 0x49, 0x49, 0x49, 0x36, // B
    0x3E, 0x41, 0x41, 0x41, 0x22, // C
    0x7F, 0x41, 0x41, 0x22, 0x1C, // D
    0x7F, 0x49, 0x49, 0x49, 0x41, // E
    0x7F, 0x09, 0x09, 0x01, 0x01, // F
    0x3E, 0x41, 0x41, 0x51, 0x32, // G
    0x7F, 0x08, 0x08, 0x08, 0x7F, // H
    0x00, 0x41, 0x7F, 0x41, 0x00, // I
    0x20, 0x40, 0x41, 0x3F, 0x01, // J
    0x7F, 0x08, 0x14, 0x22, 0x41, // K
    0x7F, 0x40, 0x40, 0x40, 0x40, // L
    0x7F, 0x02, 0x04, 0x02, 0x7F, // M
    0x7F, 0x04, 0x08, 0x10, 0x7F, // N
    0x3E, 0x41, 0x41, 0x41, 0x3E, // O
    0x7F, 0x09, 0x09, 0x09, 0x06, // P
    0x3E, 0x41, 0x51, 0x21, 0x5E, // Q
    0x7F, 0x09, 0x19, 0x29, 0x46, // R
    0x46, 0x49, 0x49, 0x49, 0x31, // S
    0x01, 0x01, 0x7F, 0x01, 0x01, // T
    0x3F, 0x40, 0x40, 0x40, 0x3F, // U
    0x1F, 0x20, 0x40, 0x20, 0x1F, // V
    0x7F, 0x20, 0x18, 0x20, 0x7F, // W
    0x63, 0x14, 0x08, 0x14, 0x63, // X
    0x03, 0x04, 0x78, 0x04, 0x03, // Y
    0x61, 0x51, 0x49, 0x45, 0x43, // Z
    0x00, 0x00, 0x7F, 0x41, 0x41, // [
    0x02, 0x04, 0x08, 0x10, 0x20, // backslash
    0x41, 0x41, 0x7F, 0x00, 0x00, // ]
    0x04, 0x02, 0x01, 0x02, 0x04, // ^
    0x40, 0x40, 0x40, 0x40, 0x40, // _
    0x00, 0x01, 0x02, 0x04, 0x00, // `
    0x20, 0x54, 0x54, 0x54, 0x78, // a
    0x7F, 0x48, 0x44, 0x44, 0x38, // b
    0x38, 0x44, 0x44, 0x44, 0x20, // c
    0x38, 0x44, 0x44, 0x48, 0x7F, // d
    0x38, 0x54, 0x54, 0x54, 0x18, // e
    0x08, 0x7E, 0x09, 0x01, 0x02, // f
    0x08, 0x14, 0x54, 0x54, 0x3C, // g
    0x7F, 0x08, 0x04, 0x04, 0x78, // h
    0x00, 0x44, 0x7D, 0x40, 0x00, // i
    0x20, 0x40, 0x44, 0x3D, 0x00, // j
    0x00, 0x7F, 0x10, 0x28, 0x44, // k
    0x00, 0x41, 0x7F, 0x40, 0x00, // l
    0x7C, 0x04, 0x18, 0x04, 0x78, // m
    0x7C, 0x08, 0x04, 0x04, 0x78, // n
    0x38, 0x44, 0x44, 0x44, 0x38, // o
    0x7C, 0x14, 0x14, 0x14, 0x08, // p
    0x08, 0x14, 0x14, 0x18, 0x7C, // q
    0x7C, 0x08, 0x04, 0x04, 0x08, // r
    0x48, 0x54, 0x54, 0x54, 0x20, // s
    0x04, 0x3F, 0x44, 0x40, 0x20, // t
    0x3C, 0x40, 0x40, 0x20, 0x7C, // u
    0x1C, 0x20, 0x40, 0x20, 0x1C, // v
    0x3C, 0x40, 0x30, 0x40, 0x3C, // w
    0x44, 0x28, 0x10, 0x28, 0x44, // x
    0x0C, 0x50, 0x50, 0x50, 0x3C, // y
    0x44, 0x64, 0x54, 0x4C, 0x44, // z
    0x00, 0x08, 0x36, 0x41, 0x00, // {
    0x00, 0x00, 0x7F, 0x00, 0x00, // |
    0x00, 0x41, 0x36, 0x08, 0x00, // }
    0x02, 0x01, 0x02, 0x04, 0x02, // ~
    0x03, 0x0F, 0x3F, 0x0F, 0x03, // annunciator triangle
];

/// Digit cell width: 14 lit columns and a 3-column gutter for punctuation
const DIGIT_GLYPH_WIDTH: u8 = 14;
const DIGIT_CELL_WIDTH: u8 = 17;
const DIGIT_SCALE_Y: u8 = 2;

const DIGIT_FONT_LEN: usize = magnified_len(&SYSTEM_5X7_DATA, DIGIT_CELL_WIDTH, DIGIT_SCALE_Y);

/// Large digit font, 17x14 cells
pub static DIGIT_FONT: [u8; DIGIT_FONT_LEN] =
    magnify(&SYSTEM_5X7_DATA, DIGIT_GLYPH_WIDTH, DIGIT_CELL_WIDTH, DIGIT_SCALE_Y);

/// Punctuation marks drawn in the digit gutters
///
/// Codes 32..=35: none, comma, dot, colon.
pub static PUNCTUATION_2X7: [u8; 14] = [
    0x00, 0x00, // size (unused)
    2,    // width
    7,    // height
    32,   // first char
    35,   // last char
    0x00, 0x00, // none
    0xA0, 0x60, // ,
    0xC0, 0xC0, // .
    0x6C, 0x6C, // :
];

/// HP logo shown on the splash screen, 52x32
pub static HP_LOGO: [u8; 2 + 52 * 4] = [
    52, // width
    32, // height
    0xF0, 0xFC, 0xFE, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0x3F,
    0x1F, 0x0F, 0x07, 0x07, 0x03, 0xC1, 0xF8, 0xFF, 0x7F, 0x0F, 0x01, 0x00, 0x02, 0x03, 0x03,
    0x03, 0x07, 0x07, 0x07, 0x0F, 0x1F, 0x3F, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFE, 0xFE, 0xFC, 0xF0,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x07, 0x01, 0x00, 0x00,
    0x00, 0x00, 0xC0, 0xF8, 0xFF, 0x7F, 0x1F, 0x8F, 0xFC, 0xFC, 0xFC, 0x18, 0x00, 0xE0, 0xFC,
    0xFC, 0x7C, 0x0C, 0xCC, 0xFC, 0xFC, 0x7C, 0x00, 0x00, 0x01, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xE0, 0x80, 0x00, 0x00,
    0x30, 0x3E, 0x3F, 0x1F, 0x03, 0x30, 0x3E, 0x3F, 0x3F, 0x07, 0xC0, 0xF8, 0xFF, 0x7F, 0x7F,
    0x63, 0x70, 0x7E, 0x3F, 0x1F, 0x03, 0x00, 0x00, 0x00, 0x80, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x0F, 0x3F, 0x7F, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC,
    0xF8, 0xF8, 0xF0, 0xE0, 0xE0, 0x60, 0x00, 0xC0, 0xF8, 0xFE, 0xFF, 0x1F, 0x83, 0xC0, 0xC0,
    0xC0, 0xE0, 0xE0, 0xE0, 0xF0, 0xF8, 0xF8, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0x7F, 0x7F, 0x3F, 0x0F,
];

/// Parse the three panel fonts
pub fn panel_fonts() -> Result<PanelFonts<'static>, FontError> {
    Ok(PanelFonts {
        digits: Font::parse(&DIGIT_FONT)?,
        punctuation: Font::parse(&PUNCTUATION_2X7)?,
        system: Font::parse(&SYSTEM_5X7)?,
    })
}

/// Parse the splash logo
pub fn logo() -> Result<Bitmap<'static>, BitmapError> {
    Bitmap::parse(&HP_LOGO)
}
