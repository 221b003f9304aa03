//! Control box stream processing
//!
//! Turns the raw UART byte stream into published height readings.

pub mod processor;
pub mod reading;

pub use processor::{PacketState, StreamProcessor};
pub use reading::HeightReading;
