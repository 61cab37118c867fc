//! Graphic LCD support for the Eidolon panel
//!
//! This crate provides:
//! - Display geometry and chip addressing for the 202x32 module
//! - `DisplayController` trait and the SBN166G implementation on top of an
//!   `LcdBus`
//! - Font and bitmap resource parsing
//! - `PlaneWriter` for pixel-row-aligned column writes without a frame buffer
//! - `Glcd` glyph renderer
//!
//! # Architecture
//!
//! The module has no frame buffer on the MCU side. Anything that does not
//! start on a page boundary is merged into the controller RAM with a
//! read-modify-write, so the controllers must support reads.

#![no_std]

pub mod backend;
pub mod bitmap;
pub mod font;
pub mod geometry;
pub mod plane;
pub mod sbn166g;
pub mod text;

#[cfg(test)]
pub(crate) mod mock;

// Re-export key types
pub use backend::{DisplayController, GlcdError};
pub use bitmap::{Bitmap, BitmapError};
pub use font::{magnified_len, magnify, Font, FontError, GlyphLocation};
pub use geometry::{resolve_chip, Chip, LCD_BOTTOM, LCD_HEIGHT, LCD_PAGES, LCD_RIGHT, LCD_WIDTH};
pub use plane::{Cursor, DrawMode, PlaneWriter};
pub use sbn166g::Sbn166g;
pub use text::Glcd;
