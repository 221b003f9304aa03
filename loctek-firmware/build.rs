//! Build script for loctek-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates desk.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Baud rate the desk control box transmits at
const CONTROL_BOX_BAUDRATE: i64 = 9600;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate desk.toml at compile time
///
/// The firmware parser falls back to defaults on error; failing the build
/// here keeps a broken file from silently being ignored.
fn validate_config() {
    println!("cargo:rerun-if-changed=desk.toml");

    let config_path = Path::new("desk.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!("\nERROR: failed to read desk.toml: {}\n", e),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => panic!("\nERROR: invalid TOML syntax in desk.toml:\n{}\n", e),
    };

    let errors = check_config(&config);
    if !errors.is_empty() {
        panic!(
            "\nERROR: desk.toml has {} problem(s):\n{}\n",
            errors.len(),
            errors
                .iter()
                .map(|e| format!("  - {}", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    if let Some(baud) = config
        .get("uart")
        .and_then(|u| u.get("baudrate"))
        .and_then(|b| b.as_integer())
    {
        if baud != CONTROL_BOX_BAUDRATE {
            println!(
                "cargo:warning=desk.toml baudrate {} differs from the control box rate {}",
                baud, CONTROL_BOX_BAUDRATE
            );
        }
    }
}

/// Collect every problem in the parsed config
fn check_config(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return vec!["top level must be a table".to_string()],
    };

    for (section, value) in root {
        let table = match value.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("'{}' must be a [section]", section));
                continue;
            }
        };

        if !["sensor", "uart"].contains(&section.as_str()) {
            errors.push(format!("unknown section [{}]", section));
            continue;
        }

        for (key, value) in table {
            let ok = match (section.as_str(), key.as_str()) {
                ("sensor", "name") => value.as_str().is_some_and(|s| s.len() <= 32),
                ("sensor", "unit") => value
                    .as_str()
                    .is_some_and(|s| ["cm", "centimeters", "in", "inches"].contains(&s)),
                ("uart", "baudrate") => value.as_integer().is_some_and(|b| b > 0),
                ("uart", "data_bits") => value.as_integer().is_some_and(|b| b == 7 || b == 8),
                ("uart", "parity") => value
                    .as_str()
                    .is_some_and(|s| ["none", "even", "odd"].contains(&s)),
                ("uart", "stop_bits") => value.as_integer().is_some_and(|b| b == 1 || b == 2),
                _ => {
                    errors.push(format!("[{}] unknown key '{}'", section, key));
                    continue;
                }
            };

            if !ok {
                errors.push(format!("[{}] invalid value for '{}'", section, key));
            }
        }
    }

    errors
}
