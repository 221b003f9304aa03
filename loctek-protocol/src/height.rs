//! Height computation from three digit patterns

use crate::segment::{decode_digit, is_decimal, DIGIT_AMBIGUOUS};

/// Compute the displayed height from the hundreds, tens and ones patterns
///
/// Returns `None` when the tens pattern decodes to the ambiguous value 10.
/// When the tens pattern carries the decimal flag the result has one
/// decimal place (e.g. digits 7, 2, 5 with the flag give 72.5).
pub fn compute_height(hundreds: u8, tens: u8, ones: u8) -> Option<f32> {
    let tens_digit = decode_digit(tens);
    if tens_digit == DIGIT_AMBIGUOUS {
        return None;
    }

    let value =
        decode_digit(hundreds) as u16 * 100 + tens_digit as u16 * 10 + decode_digit(ones) as u16;

    let height = value as f32;
    if is_decimal(tens) {
        Some(height / 10.0)
    } else {
        Some(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number() {
        // 7, 2, 5
        assert_eq!(compute_height(0x70, 0x6D, 0x5B), Some(725.0));
        // 0, 0, 1
        assert_eq!(compute_height(0x7E, 0x7E, 0x06), Some(1.0));
    }

    #[test]
    fn test_decimal_tens_divides_by_ten() {
        // Tens digit unknown once the flag is set, so only 0 and 1 remain
        assert_eq!(compute_height(0x12, 0x86, 0x06), Some(0.1));
        assert_eq!(compute_height(0x7B, 0x80, 0x33), Some(90.4));
    }

    #[test]
    fn test_ambiguous_tens_suppressed() {
        assert_eq!(compute_height(0x7E, 0x01, 0x06), None);
        assert_eq!(compute_height(0x7F, 0x01, 0x7F), None);
    }

    #[test]
    fn test_ambiguous_hundreds_and_ones_still_count() {
        // Only the tens position is guarded
        assert_eq!(compute_height(0x01, 0x7E, 0x7E), Some(1000.0));
        assert_eq!(compute_height(0x7E, 0x7E, 0x01), Some(10.0));
    }

    #[test]
    fn test_all_unknown_is_zero() {
        assert_eq!(compute_height(0x00, 0x00, 0x00), Some(0.0));
    }
}
