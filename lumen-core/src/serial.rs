//! Serial console character handling
//!
//! Every byte received on the console UART is echoed to the OLED and the
//! console log; digits are additionally rendered on the matrix.

use core::fmt::Write;

use heapless::String;

use crate::leds::STATUS_LINE_LEN;
use crate::matrix::Digit;

/// What to do with one received byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialAction {
    /// Character to show on the display
    pub echo: char,
    /// Digit to paint on the matrix, if the byte was `'0'..='9'`
    pub digit: Option<Digit>,
}

impl SerialAction {
    /// Classify a received byte
    ///
    /// Bytes are taken as Latin-1, so every value maps to a `char`.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            echo: char::from(byte),
            digit: Digit::from_ascii(byte),
        }
    }

    /// Echo as a one-character string for the display
    pub fn echo_text(&self) -> String<4> {
        let mut text = String::new();
        let _ = text.push(self.echo);
        text
    }

    /// Console line, e.g. "Received: 7"
    pub fn console_line(&self) -> String<STATUS_LINE_LEN> {
        let mut line = String::new();
        let _ = write!(line, "Received: {}", self.echo);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bytes() {
        for byte in b'0'..=b'9' {
            let action = SerialAction::from_byte(byte);
            assert_eq!(action.digit.map(Digit::value), Some(byte - b'0'));
            assert_eq!(action.echo, byte as char);
        }
    }

    #[test]
    fn test_non_digit_echo_only() {
        let action = SerialAction::from_byte(b'x');
        assert_eq!(action.digit, None);
        assert_eq!(action.echo_text().as_str(), "x");
        assert_eq!(action.console_line().as_str(), "Received: x");
    }

    #[test]
    fn test_high_byte() {
        let action = SerialAction::from_byte(0xE9);
        assert_eq!(action.echo, 'é');
        assert_eq!(action.digit, None);
        assert_eq!(action.echo_text().len(), 2);
    }
}
