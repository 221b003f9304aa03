//! 7-segment pattern decoding
//!
//! The control box forwards the raw segment drive pattern for each digit of
//! the handset display instead of a number. The patterns below are the ones
//! observed on the wire; they are matched against the whole byte.

/// Decimal point bit, carried on the tens digit
pub const DECIMAL_FLAG: u8 = 0x80;

/// Pattern that decodes to the out-of-range value 10
///
/// Its meaning on the handset is unknown. A tens digit carrying it makes
/// the whole reading unusable, see [`crate::height::compute_height`].
pub const SEGMENT_AMBIGUOUS: u8 = 0x01;

/// Value produced for [`SEGMENT_AMBIGUOUS`]
pub const DIGIT_AMBIGUOUS: u8 = 10;

// Wire patterns for digits 0-9
const SEGMENT_0: u8 = 0x7E;
const SEGMENT_1: u8 = 0x06;
const SEGMENT_2: u8 = 0x6D;
const SEGMENT_3: u8 = 0x79;
const SEGMENT_4: u8 = 0x33;
const SEGMENT_5: u8 = 0x5B;
const SEGMENT_6: u8 = 0x5F;
const SEGMENT_7: u8 = 0x70;
const SEGMENT_8: u8 = 0x7F;
const SEGMENT_9: u8 = 0x7B;

/// Decode a segment pattern into its digit
///
/// Unknown patterns, including any pattern with [`DECIMAL_FLAG`] set,
/// decode to 0. This is not treated as an error.
pub fn decode_digit(code: u8) -> u8 {
    match code {
        SEGMENT_0 => 0,
        SEGMENT_1 => 1,
        SEGMENT_2 => 2,
        SEGMENT_3 => 3,
        SEGMENT_4 => 4,
        SEGMENT_5 => 5,
        SEGMENT_6 => 6,
        SEGMENT_7 => 7,
        SEGMENT_8 => 8,
        SEGMENT_9 => 9,
        SEGMENT_AMBIGUOUS => DIGIT_AMBIGUOUS,
        _ => 0,
    }
}

/// Returns true if the pattern has the decimal point lit
pub fn is_decimal(code: u8) -> bool {
    code & DECIMAL_FLAG == DECIMAL_FLAG
}
