//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Every peripheral is owned by exactly one task; the others reach it
//! through these queues.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use heapless::String;

use lumen_core::input::ButtonEvent;
use lumen_core::leds::STATUS_LINE_LEN;
use lumen_core::matrix::Digit;

/// Characters per OLED line with the 6x10 font on a 128 px panel
pub const DISPLAY_COLS: usize = 21;

/// Text shown on the OLED
pub type DisplayText = String<DISPLAY_COLS>;

/// Line written to the serial console
pub type ConsoleLine = String<STATUS_LINE_LEN>;

/// Channel capacity for button edges
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Channel capacity for console lines
const CONSOLE_CHANNEL_SIZE: usize = 8;

/// Raw button edges from the input task (single consumer: indicator task)
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Lines for the console UART
pub static CONSOLE_LINES: Channel<CriticalSectionRawMutex, ConsoleLine, CONSOLE_CHANNEL_SIZE> =
    Channel::new();

/// Latest message for the OLED; newer text replaces anything not yet drawn
pub static DISPLAY_TEXT: Signal<CriticalSectionRawMutex, DisplayText> = Signal::new();

/// Latest digit for the LED matrix
pub static MATRIX_DIGIT: Signal<CriticalSectionRawMutex, Digit> = Signal::new();

/// Replace the OLED contents with `text`, truncated to one line
pub fn show_text(text: &str) {
    let mut line = DisplayText::new();
    for ch in text.chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
    DISPLAY_TEXT.signal(line);
}

/// Queue a console line, dropping it if the console is backed up
pub fn console(line: ConsoleLine) {
    if CONSOLE_LINES.try_send(line).is_err() {
        warn!("Console channel full, dropping line");
    }
}
