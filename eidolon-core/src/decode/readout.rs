//! Decoded display contents

use eidolon_protocol::{FrameSet, Register};
use heapless::String;

use super::annunciator::{AnnunciatorMask, ANNUNCIATOR_COUNT};
use super::digit::{digit_char, raw_digit, DIGIT_COUNT};
use super::punctuation::Punctuation;

/// Room for every digit plus its punctuation
pub const READOUT_TEXT_LEN: usize = DIGIT_COUNT * 2;

/// One complete instrument display update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readout {
    /// Font character per digit, left to right
    pub digits: [u8; DIGIT_COUNT],
    /// Punctuation after each digit
    pub punctuation: [Punctuation; DIGIT_COUNT],
    /// Annunciator row
    pub annunciators: AnnunciatorMask,
}

impl Default for Readout {
    fn default() -> Self {
        Self::blank()
    }
}

impl Readout {
    /// Nothing shown
    pub const fn blank() -> Self {
        Self {
            digits: [b' '; DIGIT_COUNT],
            punctuation: [Punctuation::None; DIGIT_COUNT],
            annunciators: AnnunciatorMask(0),
        }
    }

    /// Every segment and annunciator lit
    pub const fn lamp_test() -> Self {
        Self {
            digits: [b'*'; DIGIT_COUNT],
            punctuation: [Punctuation::None; DIGIT_COUNT],
            annunciators: AnnunciatorMask::ALL,
        }
    }

    /// Decode a frame set
    ///
    /// Does not check readiness, callers only hand in complete sets.
    pub fn from_frames(frames: &FrameSet) -> Self {
        let a = &frames.frame(Register::A).data;
        let b = &frames.frame(Register::B).data;
        let c = &frames.frame(Register::C).data;

        let digits = core::array::from_fn(|i| raw_digit(a, b, c, i).map_or(b'?', digit_char));
        let punctuation = core::array::from_fn(|i| Punctuation::decode(b[i / 2], i));
        let annunciators = AnnunciatorMask::from_bytes(frames.data(Register::Annunciator));

        Self {
            digits,
            punctuation,
            annunciators,
        }
    }

    /// Digits with their punctuation inlined, for logs
    pub fn text(&self) -> String<READOUT_TEXT_LEN> {
        let mut text = String::new();
        for (&digit, punct) in self.digits.iter().zip(self.punctuation.iter()) {
            let _ = text.push(digit as char);
            if let Some(mark) = punct.as_char() {
                let _ = text.push(mark);
            }
        }
        text
    }

    /// Annunciator row as `v`/`.`, for logs
    pub fn annunciator_text(&self) -> String<ANNUNCIATOR_COUNT> {
        let mut text = String::new();
        for position in 0..ANNUNCIATOR_COUNT {
            let _ = text.push(if self.annunciators.is_lit(position) { 'v' } else { '.' });
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eidolon_protocol::FrameDecoder;

    /// Feed registers in the order and byte order the instrument sends them
    fn frames(a: [u8; 6], b: [u8; 6], c: [u8; 6], ann: [u8; 2]) -> FrameSet {
        let mut set = FrameSet::new();
        let mut decoder = FrameDecoder::new();
        let reversed = |bytes: &[u8]| {
            let mut out = [0u8; 6];
            for (i, &byte) in bytes.iter().rev().enumerate() {
                out[i] = byte;
            }
            out
        };

        decoder.feed_transaction(&mut set, 0xFC, &[]);
        decoder.feed_transaction(&mut set, 0x0A, &reversed(&a));
        decoder.feed_transaction(&mut set, 0x1A, &reversed(&b));
        decoder.feed_transaction(&mut set, 0xBC, &reversed(&ann)[..2]);
        decoder.feed_transaction(&mut set, 0x2A, &reversed(&c));
        assert!(set.is_ready());
        set
    }

    #[test]
    fn test_decodes_voltage_readout() {
        // "  12.50 V" with a dot after digit 3 and the right-most annunciator
        let a = [0x00, 0x12, 0x50, 0x06, 0x00, 0x00];
        let b = [0x22, 0x37, 0x33, 0x21, 0x22, 0x22];
        let c = [0x00; 6];
        let set = frames(a, b, c, [0x00, 0x01]);

        let readout = Readout::from_frames(&set);

        assert_eq!(&readout.digits, b"  1250 V    ");
        assert_eq!(readout.punctuation[3], Punctuation::Dot);
        assert_eq!(
            readout.punctuation.iter().filter(|p| **p != Punctuation::None).count(),
            1
        );
        assert!(readout.annunciators.is_lit(11));
        assert_eq!(readout.text().as_str(), "  12.50 V    ");
        assert_eq!(readout.annunciator_text().as_str(), "...........v");
    }

    #[test]
    fn test_register_c_selects_lowercase() {
        // 0x41 on the even digit: a=0x1, b=0x00, c bit 4
        let mut c = [0x00; 6];
        c[0] = 0x10;
        let set = frames([0x10, 0, 0, 0, 0, 0], [0x02, 0x22, 0x22, 0x22, 0x22, 0x22], c, [0; 2]);

        let readout = Readout::from_frames(&set);
        assert_eq!(readout.digits[0], b'a');
        assert_eq!(readout.digits[1], b' ');
    }

    #[test]
    fn test_empty_registers_are_stars() {
        let set = frames([0; 6], [0; 6], [0; 6], [0; 2]);
        let readout = Readout::from_frames(&set);

        assert_eq!(readout.digits, [b'*'; DIGIT_COUNT]);
        assert_eq!(readout.punctuation, [Punctuation::None; DIGIT_COUNT]);
        assert_eq!(readout.annunciators, AnnunciatorMask(0));
    }

    #[test]
    fn test_lamp_test_readout() {
        let readout = Readout::lamp_test();
        assert_eq!(readout.text().as_str(), "************");
        assert_eq!(readout.annunciator_text().as_str(), "vvvvvvvvvvvv");
    }
}
