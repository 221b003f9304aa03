use loctek_protocol::segment::DIGIT_AMBIGUOUS;
use loctek_protocol::{
    compute_height, decode_digit, ByteRole, FrameTracker, DECIMAL_FLAG, FRAME_START,
    SEGMENT_AMBIGUOUS,
};
use proptest::prelude::*;

const KNOWN: [u8; 11] = [
    0x7E, 0x06, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x70, 0x7F, 0x7B, 0x01,
];

proptest! {
    #[test]
    fn unknown_codes_decode_to_zero(code in any::<u8>()) {
        prop_assume!(!KNOWN.contains(&code));
        prop_assert_eq!(decode_digit(code), 0);
    }

    #[test]
    fn decoded_digit_in_range(code in any::<u8>()) {
        prop_assert!(decode_digit(code) <= DIGIT_AMBIGUOUS);
    }

    #[test]
    fn compute_height_is_idempotent(h in any::<u8>(), t in any::<u8>(), o in any::<u8>()) {
        prop_assert_eq!(compute_height(h, t, o), compute_height(h, t, o));
    }

    #[test]
    fn decimal_flag_divides_by_ten(h in any::<u8>(), t in 0u8..0x80, o in any::<u8>()) {
        let flagged = t | DECIMAL_FLAG;
        // The flagged pattern itself decodes to 0
        let whole = decode_digit(h) as f32 * 100.0 + decode_digit(o) as f32;
        prop_assert_eq!(compute_height(h, flagged, o), Some(whole / 10.0));
    }

    #[test]
    fn ambiguous_tens_never_yields(h in any::<u8>(), o in any::<u8>()) {
        prop_assert_eq!(compute_height(h, SEGMENT_AMBIGUOUS, o), None);
    }

    #[test]
    fn start_always_restarts_framing(prefix in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut tracker = FrameTracker::new();
        for byte in prefix {
            tracker.observe(byte);
        }
        prop_assert_eq!(tracker.observe(FRAME_START).role, ByteRole::Start);
        prop_assert_eq!(tracker.observe(0x07).role, ByteRole::Length);
    }
}
