//! OLED display task
//!
//! Owns the display and redraws it whenever a new message is signalled.

use defmt::*;

use lumen_core::traits::TextDisplayExt;

use crate::channels::DISPLAY_TEXT;
use crate::display::Oled;

/// Message shown once the display is up
const BOOT_MESSAGE: &str = "System started";

/// Display task - shows the most recent message on the first line
#[embassy_executor::task]
pub async fn display_task(mut oled: Oled) {
    info!("Display task started");

    match oled.init() {
        Ok(()) => {
            info!("OLED initialized");
            show(&mut oled, BOOT_MESSAGE);
        }
        Err(e) => error!("Failed to initialize display: {:?}", e),
    }

    loop {
        let text = DISPLAY_TEXT.wait().await;
        show(&mut oled, text.as_str());
    }
}

fn show(oled: &mut Oled, text: &str) {
    match oled.show(text) {
        Ok(()) => trace!("Display updated"),
        Err(e) => warn!("Display update failed: {:?}", e),
    }
}
