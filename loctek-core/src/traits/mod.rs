//! Interfaces to the surrounding host
//!
//! The byte input side lives in `loctek-hal` ([`loctek_hal::ByteSource`]);
//! the output side is defined here.

pub mod sink;

pub use sink::HeightSink;
