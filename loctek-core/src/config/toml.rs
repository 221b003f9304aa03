//! Minimal TOML parser for `desk.toml`
//!
//! Handles only what the decoder configuration needs:
//! - `[sensor]` and `[uart]` section headers
//! - `key = value` pairs (string, integer)
//! - Comments (# ...)
//!
//! Anything else (arrays, inline tables, dotted keys) is rejected.

use heapless::String;
use loctek_hal::{DataBits, Parity, StopBits};

use super::types::{DeskConfig, HeightUnit};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Line is not `key = value`, or the value has the wrong type
    InvalidValue,
    /// Key not valid in its section
    UnknownKey,
    /// String longer than its fixed capacity
    TooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Sensor,
    Uart,
}

/// Parse `desk.toml` contents
///
/// Keys that are not present keep their [`DeskConfig::default`] values.
pub fn parse_config(input: &str) -> Result<DeskConfig, ParseError> {
    let mut config = DeskConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = line
                .strip_prefix('[')
                .and_then(|l| l.split('#').next())
                .map(str::trim)
                .and_then(|l| l.strip_suffix(']'))
                .ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(&mut config, section, key, value)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "sensor" => Ok(Section::Sensor),
        "uart" => Ok(Section::Uart),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    config: &mut DeskConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Sensor, "name") => {
            config.sensor.name =
                String::try_from(parse_string(value)?).map_err(|_| ParseError::TooLong)?;
        }
        (Section::Sensor, "unit") => config.sensor.unit = parse_unit(value)?,
        (Section::Uart, "baudrate") => config.uart.baudrate = parse_int(value)?,
        (Section::Uart, "data_bits") => {
            config.uart.data_bits = match parse_int::<u8>(value)? {
                7 => DataBits::Seven,
                8 => DataBits::Eight,
                _ => return Err(ParseError::InvalidValue),
            };
        }
        (Section::Uart, "parity") => {
            config.uart.parity = match parse_string(value)? {
                "none" => Parity::None,
                "even" => Parity::Even,
                "odd" => Parity::Odd,
                _ => return Err(ParseError::InvalidValue),
            };
        }
        (Section::Uart, "stop_bits") => {
            config.uart.stop_bits = match parse_int::<u8>(value)? {
                1 => StopBits::One,
                2 => StopBits::Two,
                _ => return Err(ParseError::InvalidValue),
            };
        }
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Strip an inline comment unless the # sits inside a string
    let value = match value.find('#') {
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_unit(value: &str) -> Result<HeightUnit, ParseError> {
    match parse_string(value)? {
        "cm" | "centimeters" => Ok(HeightUnit::Centimeters),
        "in" | "inches" => Ok(HeightUnit::Inches),
        _ => Err(ParseError::InvalidValue),
    }
}
