//! Board-agnostic core logic for the desk height decoder
//!
//! This crate contains everything that does not depend on a specific
//! microcontroller:
//!
//! - Stream processor turning control box bytes into height readings
//! - Publication sink trait
//! - Configuration types and the `desk.toml` parser

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod stream;
pub mod traits;
