//! Configuration types and parsing
//!
//! The firmware embeds `desk.toml` and parses it at boot with
//! [`parse_config`]. Nothing is persisted.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
