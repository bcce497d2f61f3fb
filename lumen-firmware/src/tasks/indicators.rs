//! Indicator LED task
//!
//! Sole consumer of button events: applies debounce, toggles the green or
//! blue LED and reports the new state on the display and console.

use defmt::*;
use embassy_rp::gpio::{Level, Output};

use lumen_core::input::Debouncer;
use lumen_core::leds::{IndicatorLeds, Led};

use crate::channels::{console, show_text, BUTTON_EVENTS};

/// GPIO outputs of the RGB indicator LED
pub struct IndicatorPins {
    pub red: Output<'static>,
    pub green: Output<'static>,
    pub blue: Output<'static>,
}

/// Indicator task - debounces presses and toggles LEDs
#[embassy_executor::task]
pub async fn indicator_task(mut pins: IndicatorPins, debounce_ms: u32) {
    let mut debouncer = Debouncer::new(debounce_ms);
    info!("Indicator task started (debounce {} ms)", debouncer.lockout_ms());

    // Red is not bound to any input
    pins.red.set_low();

    let mut leds = IndicatorLeds::new();

    loop {
        let event = BUTTON_EVENTS.receive().await;

        if !debouncer.accept(event) {
            trace!("Bounce on button {:?} ignored", event.button);
            continue;
        }

        let change = leds.toggle(event.button);
        let pin = match change.led {
            Led::Green => &mut pins.green,
            Led::Blue => &mut pins.blue,
        };
        pin.set_level(Level::from(change.on));

        let line = change.console_line();
        info!("{}", line.as_str());
        console(line);
        show_text(change.display_text());
    }
}
