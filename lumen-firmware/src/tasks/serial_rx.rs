//! Console UART receive task
//!
//! Echoes every received character to the display and console, and
//! forwards digits to the LED matrix.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use lumen_core::serial::SerialAction;

use crate::channels::{console, show_text, MATRIX_DIGIT};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 16;

/// Serial RX task - reads console bytes one batch at a time
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                for &byte in &buf[..n] {
                    handle_byte(byte);
                }
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Dispatch one received byte
fn handle_byte(byte: u8) {
    let action = SerialAction::from_byte(byte);
    debug!("RX byte {=u8:#x}", byte);

    show_text(action.echo_text().as_str());
    console(action.console_line());

    if let Some(digit) = action.digit {
        MATRIX_DIGIT.signal(digit);
    }
}
