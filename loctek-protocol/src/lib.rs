//! Loctek desk control box telemetry protocol
//!
//! The control box drives the handset's 7-segment display over a 9600 baud
//! UART. Every display refresh is sent as a short packet:
//!
//! ```text
//! ┌───────┬────────┬──────┬────────┬────────┬─────┬───────┐
//! │ START │ LENGTH │ TYPE │ DIGIT  │ DIGIT  │ ... │  END  │
//! │ 0x9B  │ 1B     │ 1B   │ 1B     │ 1B     │     │ 0x9D  │
//! └───────┴────────┴──────┴────────┴────────┴─────┴───────┘
//! ```
//!
//! Digit bytes are raw segment patterns; bit 7 of the tens digit is the
//! decimal point. There is no checksum to verify.
//!
//! - [`frame`]: byte window and positional framing
//! - [`segment`]: segment pattern to digit table
//! - [`height`]: digit triple to height value

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod height;
pub mod segment;

pub use frame::{
    is_height_report, ByteRole, ByteWindow, FrameState, FrameTracker, Observation,
    WindowSnapshot, FRAME_END, FRAME_START, MSG_HEIGHT, WINDOW_LEN,
};
pub use height::compute_height;
pub use segment::{decode_digit, is_decimal, DECIMAL_FLAG, SEGMENT_AMBIGUOUS};
