//! Configuration loading
//!
//! Parses the embedded `desk.toml` and reports the result at boot.
//! Uses the no_std parser from loctek-core.

pub mod loader;

pub use loader::{dump_config, load_config, rp_uart_config};
