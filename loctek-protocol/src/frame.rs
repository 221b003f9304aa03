//! Packet framing for the control box stream
//!
//! Packets are never buffered. Each byte is classified on arrival by its
//! position after the most recent START byte:
//!
//! | position | role          |
//! |----------|---------------|
//! | 0        | START (0x9B)  |
//! | 1        | LENGTH        |
//! | 2        | TYPE          |
//! | 3        | first digit   |
//! | 4        | final digit   |
//! | 5..      | unframed      |
//!
//! A START byte restarts framing wherever it appears. END (0x9D) is not
//! part of the positional framing; consumers check for it on every byte.

/// Packet start marker
pub const FRAME_START: u8 = 0x9B;

/// Packet end marker
pub const FRAME_END: u8 = 0x9D;

/// Message type of a height report
pub const MSG_HEIGHT: u8 = 0x12;

/// Declared lengths that accompany a height report
pub const HEIGHT_REPORT_LENGTHS: [u8; 2] = [7, 10];

/// Number of bytes kept in the lookback window
pub const WINDOW_LEN: usize = 5;

/// Returns true if the LENGTH/TYPE pair identifies a height report
pub fn is_height_report(declared_length: u8, message_type: u8) -> bool {
    message_type == MSG_HEIGHT && HEIGHT_REPORT_LENGTHS.contains(&declared_length)
}

/// Copy of the window contents, most recent byte first
pub type WindowSnapshot = [u8; WINDOW_LEN];

/// The last [`WINDOW_LEN`] bytes received, most recent first
///
/// Starts filled with zeros so the length never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ByteWindow {
    bytes: WindowSnapshot,
}

impl Default for ByteWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWindow {
    /// Create a zero-filled window
    pub const fn new() -> Self {
        Self {
            bytes: [0; WINDOW_LEN],
        }
    }

    /// Shift in a new byte at offset 0, dropping the oldest
    pub fn push(&mut self, byte: u8) -> WindowSnapshot {
        self.bytes.copy_within(0..WINDOW_LEN - 1, 1);
        self.bytes[0] = byte;
        self.bytes
    }

    /// Byte at `offset` (0 = most recent), or `None` past the window
    pub fn get(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Current contents
    pub fn snapshot(&self) -> WindowSnapshot {
        self.bytes
    }

    /// Refill with zeros
    pub fn clear(&mut self) {
        self.bytes = [0; WINDOW_LEN];
    }
}

/// Framing state: what the next byte is expected to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameState {
    /// Outside a packet, or past its digit bytes
    #[default]
    Idle,
    /// Got START, next byte is LENGTH
    AwaitingLength,
    /// Got LENGTH, next byte is TYPE
    AwaitingType,
    /// Got TYPE, next byte is the first digit
    AwaitingFirstDigit,
    /// Next byte completes the digits
    AwaitingFinalDigit,
}

impl FrameState {
    /// Role of the next byte in this state, ignoring START
    fn role(self) -> ByteRole {
        match self {
            FrameState::Idle => ByteRole::Unframed,
            FrameState::AwaitingLength => ByteRole::Length,
            FrameState::AwaitingType => ByteRole::MessageType,
            FrameState::AwaitingFirstDigit => ByteRole::FirstDigit,
            FrameState::AwaitingFinalDigit => ByteRole::FinalDigit,
        }
    }

    /// State after consuming a non-START byte
    fn advance(self) -> Self {
        match self {
            FrameState::Idle => FrameState::Idle,
            FrameState::AwaitingLength => FrameState::AwaitingType,
            FrameState::AwaitingType => FrameState::AwaitingFirstDigit,
            FrameState::AwaitingFirstDigit => FrameState::AwaitingFinalDigit,
            FrameState::AwaitingFinalDigit => FrameState::Idle,
        }
    }
}

/// Role of a byte within the current packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteRole {
    /// START marker, packet state must be reset
    Start,
    /// Declared length
    Length,
    /// Message type
    MessageType,
    /// First digit position (not used numerically)
    FirstDigit,
    /// Final digit position, the height can be computed
    FinalDigit,
    /// Not inside a packet's header or digit positions
    Unframed,
}

/// Result of observing one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Observation {
    /// Role of the observed byte
    pub role: ByteRole,
    /// Window after the byte was shifted in (offset 0 is the byte itself)
    pub window: WindowSnapshot,
}

impl Observation {
    /// The observed byte
    pub fn byte(&self) -> u8 {
        self.window[0]
    }
}

/// Positional packet framer
#[derive(Debug, Clone, Default)]
pub struct FrameTracker {
    window: ByteWindow,
    state: FrameState,
}

impl FrameTracker {
    /// Create a tracker with an empty window in the idle state
    pub const fn new() -> Self {
        Self {
            window: ByteWindow::new(),
            state: FrameState::Idle,
        }
    }

    /// Current framing state
    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Lookback window
    pub fn window(&self) -> &ByteWindow {
        &self.window
    }

    /// Return to the idle state with a zeroed window
    pub fn reset(&mut self) {
        self.window.clear();
        self.state = FrameState::Idle;
    }

    /// Shift a byte into the window and classify it
    pub fn observe(&mut self, byte: u8) -> Observation {
        let window = self.window.push(byte);

        let role = if byte == FRAME_START {
            self.state = FrameState::AwaitingLength;
            ByteRole::Start
        } else {
            let role = self.state.role();
            self.state = self.state.advance();
            role
        };

        Observation { role, window }
    }
}
