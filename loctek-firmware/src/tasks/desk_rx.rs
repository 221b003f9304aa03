//! Control box UART receive task
//!
//! Drains the UART into the stream processor and signals every published
//! height.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use loctek_core::stream::StreamProcessor;
use loctek_core::traits::HeightSink;
use loctek_hal::{ByteSource, SliceSource};

use crate::channels::HEIGHT_READING;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Forwards published heights to the reporter task
struct SignalSink;

impl HeightSink for SignalSink {
    fn publish(&mut self, height: f32) {
        HEIGHT_READING.signal(height);
    }
}

/// Desk RX task - decodes the control box stream
#[embassy_executor::task]
pub async fn desk_rx_task(mut rx: BufferedUartRx) {
    info!("Desk RX task started");

    let mut processor = StreamProcessor::new();
    let mut sink = SignalSink;
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                let mut source = SliceSource::new(&buf[..n]);
                if let Err(e) = processor.drain(&mut source, &mut sink) {
                    warn!("Dropped {} buffered bytes: {:?}", source.available(), e);
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                // Decoder state is kept; the next START byte resyncs
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
