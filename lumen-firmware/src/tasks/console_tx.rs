//! Console UART transmit task
//!
//! Sole writer of the console UART; other tasks queue lines on
//! `CONSOLE_LINES`.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::CONSOLE_LINES;

/// Console TX task - writes queued lines with CRLF endings
#[embassy_executor::task]
pub async fn console_tx_task(mut tx: BufferedUartTx) {
    info!("Console TX task started");

    loop {
        let line = CONSOLE_LINES.receive().await;

        if let Err(e) = write_line(&mut tx, line.as_str()).await {
            warn!("Failed to write console line: {:?}", e);
        }
    }
}

async fn write_line<W: Write>(tx: &mut W, line: &str) -> Result<(), W::Error> {
    tx.write_all(line.as_bytes()).await?;
    tx.write_all(b"\r\n").await
}
