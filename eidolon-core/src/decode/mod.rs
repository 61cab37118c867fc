//! Readout decoding
//!
//! Registers A, B and C each carry six bytes, one byte per pair of digits.
//! A digit's 7-bit character code is spread over all three registers and
//! register B also holds the punctuation after each digit.

mod annunciator;
mod digit;
mod punctuation;
mod readout;

pub use annunciator::{AnnunciatorMask, ANNUNCIATOR_COUNT, ANNUNCIATOR_GLYPH};
pub use digit::{digit_char, raw_digit, DIGIT_COUNT};
pub use punctuation::Punctuation;
pub use readout::Readout;
