//! Indicator LED state
//!
//! Button A toggles the green LED, button B the blue one. The red channel
//! of the RGB indicator is not driven by any input.

use core::fmt::Write;

use heapless::String;

use crate::input::ButtonId;

/// Length of a console status line
pub const STATUS_LINE_LEN: usize = 32;

/// Button-controlled indicator LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    Green,
    Blue,
}

impl Led {
    /// LED toggled by a button
    pub const fn for_button(button: ButtonId) -> Self {
        match button {
            ButtonId::A => Led::Green,
            ButtonId::B => Led::Blue,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Led::Green => "Green LED",
            Led::Blue => "Blue LED",
        }
    }
}

/// Result of toggling an LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedChange {
    pub led: Led,
    pub on: bool,
}

impl LedChange {
    /// Text shown on the OLED, e.g. "Green LED ON"
    pub const fn display_text(self) -> &'static str {
        match (self.led, self.on) {
            (Led::Green, true) => "Green LED ON",
            (Led::Green, false) => "Green LED OFF",
            (Led::Blue, true) => "Blue LED ON",
            (Led::Blue, false) => "Blue LED OFF",
        }
    }

    /// Console line, e.g. "Green LED: ON"
    pub fn console_line(self) -> String<STATUS_LINE_LEN> {
        let mut line = String::new();
        let _ = write!(line, "{}: {}", self.led.name(), if self.on { "ON" } else { "OFF" });
        line
    }
}

/// On/off state of the button-controlled LEDs, both off at boot
#[derive(Debug, Clone, Default)]
pub struct IndicatorLeds {
    green: bool,
    blue: bool,
}

impl IndicatorLeds {
    pub const fn new() -> Self {
        Self {
            green: false,
            blue: false,
        }
    }

    pub fn is_on(&self, led: Led) -> bool {
        match led {
            Led::Green => self.green,
            Led::Blue => self.blue,
        }
    }

    /// Flip the LED bound to `button` and report its new state
    pub fn toggle(&mut self, button: ButtonId) -> LedChange {
        let led = Led::for_button(button);
        let state = match led {
            Led::Green => &mut self.green,
            Led::Blue => &mut self.blue,
        };
        *state = !*state;

        LedChange { led, on: *state }
    }
}
