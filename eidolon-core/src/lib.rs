//! Board-agnostic core logic for the Eidolon display
//!
//! This crate contains everything between the sniffed bus bytes and the
//! pixels that does not depend on a specific MCU:
//!
//! - Shared frame store fed from the receive interrupt
//! - Digit, punctuation and annunciator decoding
//! - Panel layout configuration
//! - Panel renderer and boot screens
//! - Render progress supervision for the watchdog

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod decode;
pub mod render;
pub mod safety;
pub mod shared;

pub use decode::{AnnunciatorMask, Punctuation, Readout};
pub use render::{PanelFonts, PanelRenderer};
pub use shared::SharedFrames;
