//! Button edge task
//!
//! Only timestamps falling edges and queues them; debounce happens in the
//! indicator task so no state is shared with this one.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use lumen_core::input::{ButtonEvent, ButtonId};

use crate::channels::BUTTON_EVENTS;

/// Button task - waits for presses on both buttons (active low)
#[embassy_executor::task]
pub async fn button_task(mut a: Input<'static>, mut b: Input<'static>) {
    info!("Button task started");

    loop {
        let button = match select(a.wait_for_falling_edge(), b.wait_for_falling_edge()).await {
            Either::First(()) => ButtonId::A,
            Either::Second(()) => ButtonId::B,
        };

        // Millisecond uptime truncated to u32; the debouncer handles wrap
        let event = ButtonEvent::new(button, Instant::now().as_millis() as u32);
        trace!("Edge on button {:?} at {} ms", button, event.at_ms);

        if BUTTON_EVENTS.try_send(event).is_err() {
            warn!("Button channel full, dropping press");
        }
    }
}
