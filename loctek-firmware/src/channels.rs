//! Inter-task communication channels
//!
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Latest published desk height (only the newest value matters)
pub static HEIGHT_READING: Signal<CriticalSectionRawMutex, f32> = Signal::new();
