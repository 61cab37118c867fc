//! Digit character codes

use eidolon_protocol::MAX_FRAME_LEN;

/// Digits on the instrument display
pub const DIGIT_COUNT: usize = 12;

/// Assemble the raw code of digit `index` (0..12) from registers A, B and C
///
/// Each register byte covers a pair of digits: the even digit in the high
/// bits, the odd digit in the low bits. Returns `None` past the last digit.
pub fn raw_digit(
    a: &[u8; MAX_FRAME_LEN],
    b: &[u8; MAX_FRAME_LEN],
    c: &[u8; MAX_FRAME_LEN],
    index: usize,
) -> Option<u8> {
    let pair = index / 2;
    let (a, b, c) = (*a.get(pair)?, *b.get(pair)?, *c.get(pair)?);

    let code = if index % 2 == 0 {
        ((a & 0xF0) >> 4) | (b & 0x30) | ((c & 0x10) << 2)
    } else {
        (a & 0x0F) | ((b & 0x03) << 4) | ((c & 0x01) << 6)
    };
    Some(code)
}

/// Map a raw digit code to a font character
///
/// The instrument's character set is ASCII-like but shifted; codes without a
/// glyph in our fonts become `?`.
pub fn digit_char(code: u8) -> u8 {
    match code {
        0x00 => b'*',
        0x01..=0x1F => code + b'@',
        // Left/right arrows
        0x2C => b'<',
        0x2E => b'>',
        // All 14 segments lit
        0x3A => b'*',
        0x20..=0x3F => code,
        0x40..=0x45 => code + (b'a' - b'A'),
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_table() {
        assert_eq!(digit_char(0x00), b'*');
        assert_eq!(digit_char(0x05), b'E');
        assert_eq!(digit_char(0x1F), b'_');
        assert_eq!(digit_char(0x2C), b'<');
        assert_eq!(digit_char(0x2E), b'>');
        assert_eq!(digit_char(0x3A), b'*');
        assert_eq!(digit_char(0x41), b'a');
        assert_eq!(digit_char(0x45), b'e');
        assert_eq!(digit_char(0x46), b'?');
        assert_eq!(digit_char(0x50), b'?');
        assert_eq!(digit_char(0x7F), b'?');
    }

    #[test]
    fn test_printable_codes_pass_through() {
        assert_eq!(digit_char(0x20), b' ');
        assert_eq!(digit_char(0x30), b'0');
        assert_eq!(digit_char(0x39), b'9');
        assert_eq!(digit_char(0x2D), b'-');
        assert_eq!(digit_char(0x3F), b'?');
        // 0x40 is below 'A', so it lands one before 'a'
        assert_eq!(digit_char(0x40), b'`');
    }

    #[test]
    fn test_raw_digit_bit_layout() {
        let a = [0xAB, 0, 0, 0, 0, 0];
        let b = [0x32, 0, 0, 0, 0, 0];
        let c = [0x11, 0, 0, 0, 0, 0];

        // 0x0A | 0x30 | 0x40
        assert_eq!(raw_digit(&a, &b, &c, 0), Some(0x7A));
        // 0x0B | 0x20 | 0x40
        assert_eq!(raw_digit(&a, &b, &c, 1), Some(0x6B));
    }

    #[test]
    fn test_raw_digit_pairs() {
        let a = [0x00, 0x00, 0x00, 0x00, 0x00, 0x35];
        let zero = [0u8; 6];

        assert_eq!(raw_digit(&a, &zero, &zero, 10), Some(0x03));
        assert_eq!(raw_digit(&a, &zero, &zero, 11), Some(0x05));
        assert_eq!(raw_digit(&a, &zero, &zero, 9), Some(0x00));
    }

    #[test]
    fn test_raw_digit_past_last_digit() {
        let full = [0xFF; MAX_FRAME_LEN];

        assert!(raw_digit(&full, &full, &full, DIGIT_COUNT - 1).is_some());
        assert_eq!(raw_digit(&full, &full, &full, DIGIT_COUNT), None);
        assert_eq!(raw_digit(&full, &full, &full, usize::MAX), None);
    }
}
