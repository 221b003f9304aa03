//! Embedded configuration loading
//!
//! There is no flash persistence: the config is always the `desk.toml`
//! compiled into the image.

use defmt::*;
use embassy_rp::uart::{
    Config as RpUartConfig, DataBits as RpDataBits, Parity as RpParity, StopBits as RpStopBits,
};

use loctek_core::config::{parse_config, ConfigError, DeskConfig};
use loctek_hal::{DataBits, Parity, StopBits, UartConfig};

/// Parse the embedded configuration, falling back to defaults
pub fn load_config(input: &str) -> DeskConfig {
    match parse_config(input) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            // Only reachable if desk.toml changed without the build script noticing
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            DeskConfig::default()
        }
    }
}

/// Log the active configuration
pub fn dump_config(config: &DeskConfig) {
    info!("Loctek:");
    info!("  Sensor '{}'", config.sensor.name.as_str());
    info!("    Unit: {}", config.sensor.unit.symbol());
    info!("  UART");
    info!("    Baud rate: {}", config.uart.baudrate);
    debug!("    Data bits: {:?}", config.uart.data_bits);
    debug!("    Parity: {:?}", config.uart.parity);
    debug!("    Stop bits: {:?}", config.uart.stop_bits);

    if let Err(ConfigError::BaudrateMismatch {
        configured,
        expected,
    }) = config.check_uart_settings()
    {
        warn!(
            "  UART baud rate {} does not match the control box ({}), no packets will frame",
            configured, expected
        );
    }
}

/// Convert to the embassy-rp UART configuration
pub fn rp_uart_config(uart: &UartConfig) -> RpUartConfig {
    let mut cfg = RpUartConfig::default();
    cfg.baudrate = uart.baudrate;
    cfg.data_bits = match uart.data_bits {
        DataBits::Seven => RpDataBits::DataBits7,
        DataBits::Eight => RpDataBits::DataBits8,
    };
    cfg.parity = match uart.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    cfg.stop_bits = match uart.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    cfg
}
