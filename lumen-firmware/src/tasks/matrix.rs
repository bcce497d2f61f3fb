//! LED matrix task
//!
//! Owns the pixel buffer and the WS2812 strip. Each requested digit
//! replaces the whole frame.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_time::Timer;

use lumen_core::matrix::{Cell, PixelBuffer};
use lumen_hal_rp2040::PioWs2812;

use crate::channels::MATRIX_DIGIT;

/// Strip type used on this board (PIO0, state machine 0)
pub type MatrixStrip = PioWs2812<'static, PIO0, 0>;

/// Matrix task - renders digits as white glyphs
#[embassy_executor::task]
pub async fn matrix_task(mut strip: MatrixStrip, latch_us: u32) {
    info!("Matrix task started");

    let mut buffer = PixelBuffer::new();

    // Blank whatever the chain powered up with
    buffer.transmit(&mut strip);
    Timer::after_micros(latch_us as u64).await;

    loop {
        let digit = MATRIX_DIGIT.wait().await;

        buffer.clear();
        buffer.paint_glyph(digit, Cell::WHITE);
        // Returns with the line already idle; the latch gap starts here
        buffer.transmit(&mut strip);

        // Data line must stay low before the next frame can start
        Timer::after_micros(latch_us as u64).await;
        debug!("Matrix shows digit {}", digit.value());
    }
}
