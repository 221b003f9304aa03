//! Loctek Hardware Abstraction Layer
//!
//! The desk control box talks over a plain UART. This crate defines the
//! byte-source contract the decoder is driven through, so the same decoding
//! code runs against an RP2040 UART on the target and against byte slices
//! in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  loctek-firmware (embassy UART task)    │
//! └─────────────────────────────────────────┘
//!                     │ SliceSource
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  loctek-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │ ByteSource
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  loctek-core (StreamProcessor::drain)   │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

pub use uart::{ByteSource, DataBits, Parity, SliceSource, StopBits, UartConfig, UartError};
