//! Height report task
//!
//! Logs each new height as it is published.

use defmt::*;

use loctek_core::config::SensorConfig;

use crate::channels::HEIGHT_READING;

/// Report task - logs published heights with the configured name and unit
#[embassy_executor::task]
pub async fn report_task(sensor: SensorConfig) {
    info!("Report task started");

    loop {
        let height = HEIGHT_READING.wait().await;
        info!(
            "'{}': {} {}",
            sensor.name.as_str(),
            height,
            sensor.unit.symbol()
        );
    }
}
