//! Byte-driven height stream processor
//!
//! Owns all decoder state: the framer, the current packet's header and the
//! height reading. Fed one byte at a time, it never blocks and never
//! reports malformed input; bad packets just fail to produce a height.

use loctek_hal::ByteSource;
use loctek_protocol::{
    compute_height, is_height_report, ByteRole, FrameState, FrameTracker, Observation, FRAME_END,
};

use super::reading::HeightReading;
use crate::traits::HeightSink;

/// Header of the packet currently being received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacketState {
    /// LENGTH byte, used only to recognise the packet kind
    pub declared_length: u8,
    /// TYPE byte
    pub message_type: u8,
    /// Packet is a height report and its digits may be decoded
    pub valid: bool,
}

impl PacketState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Streaming height decoder
#[derive(Debug, Clone, Default)]
pub struct StreamProcessor {
    tracker: FrameTracker,
    packet: PacketState,
    reading: HeightReading,
}

impl StreamProcessor {
    /// Create a processor with no packet in progress and nothing published
    pub const fn new() -> Self {
        Self {
            tracker: FrameTracker::new(),
            packet: PacketState {
                declared_length: 0,
                message_type: 0,
                valid: false,
            },
            reading: HeightReading::new(),
        }
    }

    /// Current framing state
    pub fn state(&self) -> FrameState {
        self.tracker.state()
    }

    /// Header of the packet in progress
    pub fn packet(&self) -> &PacketState {
        &self.packet
    }

    /// Pending and published heights
    pub fn reading(&self) -> &HeightReading {
        &self.reading
    }

    /// Feed one byte
    ///
    /// Returns the height if this byte caused a publication.
    pub fn feed<K: HeightSink>(&mut self, byte: u8, sink: &mut K) -> Option<f32> {
        let observation = self.tracker.observe(byte);
        self.dispatch(observation);

        // END is checked on every byte, whatever the framing state
        if byte != FRAME_END {
            return None;
        }
        let height = self.reading.take_publishable()?;
        sink.publish(height);
        Some(height)
    }

    /// Feed a run of bytes, returning the number of publications
    pub fn feed_bytes<K: HeightSink>(&mut self, bytes: &[u8], sink: &mut K) -> usize {
        bytes
            .iter()
            .filter(|&&byte| self.feed(byte, sink).is_some())
            .count()
    }

    /// Consume every byte the source has buffered
    ///
    /// Returns the number of bytes consumed. A read error stops the drain
    /// and is returned; decoder state is kept so the stream can resume.
    pub fn drain<S: ByteSource, K: HeightSink>(
        &mut self,
        source: &mut S,
        sink: &mut K,
    ) -> Result<usize, S::Error> {
        let mut consumed = 0;
        while source.available() > 0 {
            let byte = source.read()?;
            self.feed(byte, sink);
            consumed += 1;
        }
        Ok(consumed)
    }

    fn dispatch(&mut self, observation: Observation) {
        let byte = observation.byte();
        match observation.role {
            ByteRole::Start => self.packet.reset(),
            ByteRole::Length => self.packet.declared_length = byte,
            ByteRole::MessageType => {
                self.packet.message_type = byte;
                self.packet.valid = is_height_report(self.packet.declared_length, byte);
            }
            ByteRole::FirstDigit | ByteRole::Unframed => {}
            ByteRole::FinalDigit => {
                if !self.packet.valid {
                    return;
                }
                let [ones, tens, hundreds, ..] = observation.window;
                if let Some(height) = compute_height(hundreds, tens, ones) {
                    self.reading.set_pending(height);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Default)]
    struct Recorder {
        values: Vec<f32, 16>,
    }

    impl HeightSink for Recorder {
        fn publish(&mut self, height: f32) {
            self.values.push(height).unwrap();
        }
    }

    fn run(bytes: &[u8]) -> (StreamProcessor, Recorder) {
        let mut processor = StreamProcessor::new();
        let mut sink = Recorder::default();
        processor.feed_bytes(bytes, &mut sink);
        (processor, sink)
    }

    #[test]
    fn test_single_height_packet() {
        let (processor, sink) = run(&[0x9B, 0x07, 0x12, 0x7E, 0x06, 0x9D]);
        assert_eq!(sink.values.as_slice(), &[1.0]);
        assert_eq!(processor.reading().last_published(), Some(1.0));
    }

    #[test]
    fn test_decimal_height_packet() {
        let (_, sink) = run(&[0x9B, 0x07, 0x12, 0x86, 0x06, 0x9D]);
        assert_eq!(sink.values.as_slice(), &[0.1]);
    }

    #[test]
    fn test_length_ten_accepted() {
        let (_, sink) = run(&[0x9B, 0x0A, 0x12, 0x6D, 0x5B, 0x9D]);
        // hundreds = TYPE byte (0), tens = 2, ones = 5
        assert_eq!(sink.values.as_slice(), &[25.0]);
    }

    #[test]
    fn test_wrong_type_never_valid() {
        let (processor, sink) = run(&[0x9B, 0x07, 0x13, 0x7E, 0x06, 0x9D]);
        assert!(sink.values.is_empty());
        assert!(!processor.packet().valid);
    }

    #[test]
    fn test_wrong_length_never_valid() {
        let (processor, sink) = run(&[0x9B, 0x05, 0x12, 0x7E, 0x06, 0x9D]);
        assert!(sink.values.is_empty());
        assert!(!processor.packet().valid);
        assert_eq!(processor.packet().declared_length, 5);
    }

    #[test]
    fn test_repeated_packet_published_once() {
        let packet = [0x9B, 0x07, 0x12, 0x7E, 0x06, 0x9D];
        let mut processor = StreamProcessor::new();
        let mut sink = Recorder::default();
        assert_eq!(processor.feed_bytes(&packet, &mut sink), 1);
        assert_eq!(processor.feed_bytes(&packet, &mut sink), 0);
        assert_eq!(sink.values.as_slice(), &[1.0]);
    }

    #[test]
    fn test_ambiguous_tens_keeps_previous_pending() {
        let mut processor = StreamProcessor::new();
        let mut sink = Recorder::default();
        processor.feed_bytes(&[0x9B, 0x07, 0x12, 0x7E, 0x06, 0x9D], &mut sink);
        processor.feed_bytes(&[0x9B, 0x07, 0x12, 0x01, 0x06, 0x9D], &mut sink);
        assert_eq!(processor.reading().pending(), 1.0);
        assert_eq!(sink.values.as_slice(), &[1.0]);
    }

    #[test]
    fn test_start_mid_packet_discards_header() {
        // The first packet is cut off after its TYPE byte
        let (processor, sink) = run(&[0x9B, 0x07, 0x12, 0x9B, 0x05, 0x12, 0x7E, 0x06, 0x9D]);
        assert!(sink.values.is_empty());
        assert_eq!(processor.packet().declared_length, 5);
    }

    #[test]
    fn test_start_mid_packet_then_valid_packet() {
        let (_, sink) = run(&[0x9B, 0x05, 0x9B, 0x07, 0x12, 0x7E, 0x79, 0x9D]);
        assert_eq!(sink.values.as_slice(), &[3.0]);
    }

    #[test]
    fn test_truncated_packet_produces_nothing() {
        let (processor, sink) = run(&[0x9B, 0x07, 0x12, 0x7E, 0x9D]);
        assert!(sink.values.is_empty());
        assert_eq!(processor.reading().pending(), 0.0);
    }

    #[test]
    fn test_end_marker_without_new_digits_republishes_nothing() {
        let mut processor = StreamProcessor::new();
        let mut sink = Recorder::default();
        processor.feed_bytes(&[0x9B, 0x07, 0x12, 0x7E, 0x06, 0x9D], &mut sink);
        processor.feed_bytes(&[0x9D, 0x00, 0x9D], &mut sink);
        assert_eq!(sink.values.as_slice(), &[1.0]);
    }

    #[test]
    fn test_end_marker_decoupled_from_packet() {
        // Height computed, END arrives only later inside garbage
        let mut processor = StreamProcessor::new();
        let mut sink = Recorder::default();
        processor.feed_bytes(&[0x9B, 0x07, 0x12, 0x7E, 0x06, 0x00, 0x00], &mut sink);
        assert!(sink.values.is_empty());
        assert_eq!(processor.feed(0x9D, &mut sink), Some(1.0));
    }

    #[test]
    fn test_end_marker_in_length_slot_still_checked() {
        let mut processor = StreamProcessor::new();
        let mut sink = Recorder::default();
        processor.feed_bytes(&[0x9B, 0x07, 0x12, 0x7E, 0x06], &mut sink);
        processor.feed_bytes(&[0x9B, 0x9D], &mut sink);
        assert_eq!(sink.values.as_slice(), &[1.0]);
        assert_eq!(processor.state(), FrameState::AwaitingType);
    }

    #[test]
    fn test_zero_height_not_published() {
        // Known quirk: a decoded 0 is indistinguishable from "no reading"
        let (processor, sink) = run(&[0x9B, 0x07, 0x12, 0x7E, 0x7E, 0x9D]);
        assert!(sink.values.is_empty());
        assert!(processor.packet().valid);
    }

    #[test]
    fn test_state_follows_packet() {
        let mut processor = StreamProcessor::new();
        let mut sink = Recorder::default();
        assert_eq!(processor.state(), FrameState::Idle);
        processor.feed(0x9B, &mut sink);
        assert_eq!(processor.state(), FrameState::AwaitingLength);
        processor.feed(0x07, &mut sink);
        assert_eq!(processor.state(), FrameState::AwaitingType);
        processor.feed(0x12, &mut sink);
        assert_eq!(processor.state(), FrameState::AwaitingFirstDigit);
        processor.feed(0x7E, &mut sink);
        assert_eq!(processor.state(), FrameState::AwaitingFinalDigit);
        processor.feed(0x06, &mut sink);
        assert_eq!(processor.state(), FrameState::Idle);
    }

    #[test]
    fn test_drain_consumes_everything() {
        let mut processor = StreamProcessor::new();
        let mut sink = Recorder::default();
        let mut source = loctek_hal::SliceSource::new(&[0x9B, 0x07, 0x12, 0x7E, 0x06, 0x9D]);
        assert_eq!(processor.drain(&mut source, &mut sink), Ok(6));
        assert_eq!(source.available(), 0);
        assert_eq!(sink.values.as_slice(), &[1.0]);
    }
}
