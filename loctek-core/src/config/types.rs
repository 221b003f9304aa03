//! Configuration type definitions

use heapless::String;
use loctek_hal::UartConfig;

/// Maximum sensor name length
pub const MAX_NAME_LEN: usize = 32;

/// Baud rate the control box transmits at
pub const EXPECTED_BAUDRATE: u32 = 9600;

/// Default sensor name
pub const DEFAULT_SENSOR_NAME: &str = "Desk Height";

/// Unit the handset displays
///
/// The decoder does not convert; this only labels published values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeightUnit {
    #[default]
    Centimeters,
    Inches,
}

impl HeightUnit {
    /// Short unit suffix for logs
    pub fn symbol(self) -> &'static str {
        match self {
            HeightUnit::Centimeters => "cm",
            HeightUnit::Inches => "in",
        }
    }
}

/// Published height sensor
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Display name
    pub name: String<MAX_NAME_LEN>,
    /// Displayed unit
    pub unit: HeightUnit,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            name: String::try_from(DEFAULT_SENSOR_NAME).unwrap_or_default(),
            unit: HeightUnit::default(),
        }
    }
}

/// Complete decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeskConfig {
    /// Height sensor settings
    pub sensor: SensorConfig,
    /// Control box UART settings
    pub uart: UartConfig,
}

/// Configuration check failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// UART configured for a rate the control box does not use
    BaudrateMismatch { configured: u32, expected: u32 },
}

impl DeskConfig {
    /// Check the UART settings against the control box link
    ///
    /// A mismatch is not fatal; the stream will just never frame.
    pub fn check_uart_settings(&self) -> Result<(), ConfigError> {
        if self.uart.baudrate != EXPECTED_BAUDRATE {
            return Err(ConfigError::BaudrateMismatch {
                configured: self.uart.baudrate,
                expected: EXPECTED_BAUDRATE,
            });
        }
        Ok(())
    }
}
