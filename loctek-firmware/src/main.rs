//! Loctek desk height decoder firmware
//!
//! Listens to the desk control box on UART0 (GPIO1 RX) and reports the
//! height shown on the handset whenever it changes.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod config;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit desk.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../desk.toml");

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
// TX is unused but the buffered driver requires one
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Loctek desk decoder starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let desk_config = config::load_config(EMBEDDED_CONFIG);
    config::dump_config(&desk_config);

    // Pin assignment is board-specific (Pico: GPIO0 TX, GPIO1 RX)
    let uart_config = config::rp_uart_config(&desk_config.uart);

    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("UART initialized for control box");

    spawner.spawn(tasks::desk_rx_task(rx)).unwrap();
    spawner
        .spawn(tasks::report_task(desk_config.sensor))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
