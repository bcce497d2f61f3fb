//! Board configuration types
//!
//! Pin assignments are fixed by the board layout and live in the firmware;
//! these are the tunables that can change without rewiring.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::input::DEFAULT_DEBOUNCE_MS;

/// Shortest latch (reset) time accepted by WS2812 parts, in µs
pub const MIN_LATCH_US: u32 = 50;

/// Console UART settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct UartSettings {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for UartSettings {
    fn default() -> Self {
        Self { baudrate: 115_200 }
    }
}

/// I2C bus settings for the OLED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct I2cSettings {
    /// Bus clock in Hz
    pub frequency_hz: u32,
}

impl Default for I2cSettings {
    fn default() -> Self {
        Self {
            frequency_hz: 400_000,
        }
    }
}

/// OLED display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplaySettings {
    /// 7-bit I2C address (0x3C or 0x3D for SSD1306 modules)
    pub address: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { address: 0x3C }
    }
}

/// Push-button settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ButtonSettings {
    /// Lockout after an accepted press
    pub debounce_ms: u32,
}

impl Default for ButtonSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// LED matrix settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MatrixSettings {
    /// Idle-low time after a frame so the strip latches it
    pub latch_us: u32,
}

impl Default for MatrixSettings {
    fn default() -> Self {
        Self { latch_us: 60 }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BoardConfig {
    pub uart: UartSettings,
    pub i2c: I2cSettings,
    pub display: DisplaySettings,
    pub buttons: ButtonSettings,
    pub matrix: MatrixSettings,
}

impl BoardConfig {
    /// Check every value against what the hardware supports
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(bool, &'static str); 5] = [
            ((1_200..=921_600).contains(&self.uart.baudrate), "uart.baudrate"),
            ((10_000..=1_000_000).contains(&self.i2c.frequency_hz), "i2c.frequency_hz"),
            (matches!(self.display.address, 0x3C | 0x3D), "display.address"),
            (self.buttons.debounce_ms <= 5_000, "buttons.debounce_ms"),
            ((MIN_LATCH_US..=1_000).contains(&self.matrix.latch_us), "matrix.latch_us"),
        ];

        match checks.iter().find(|(ok, _)| !*ok) {
            Some(&(_, field)) => Err(ConfigError::new(0, ConfigErrorKind::OutOfRange(field))),
            None => Ok(()),
        }
    }
}

/// Configuration error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigErrorKind {
    /// Malformed `[section]` header
    InvalidSection,
    /// Section name not recognised
    UnknownSection,
    /// Key not recognised in its section
    UnknownKey,
    /// `key = value` before any section header
    KeyOutsideSection,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Value is not an unsigned integer of the right width
    InvalidValue,
    /// Value outside the supported range for the named field
    OutOfRange(&'static str),
}

/// Configuration error with its 1-based line (0 when not tied to a line)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigError {
    pub line: usize,
    pub kind: ConfigErrorKind,
}

impl ConfigError {
    pub const fn new(line: usize, kind: ConfigErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ConfigErrorKind::InvalidSection => "malformed section header",
            ConfigErrorKind::UnknownSection => "unknown section",
            ConfigErrorKind::UnknownKey => "unknown key",
            ConfigErrorKind::KeyOutsideSection => "key outside of a section",
            ConfigErrorKind::InvalidLine => "expected `key = value`",
            ConfigErrorKind::InvalidValue => "invalid integer value",
            ConfigErrorKind::OutOfRange(field) => return write!(f, "{} out of range", field),
        };

        if self.line == 0 {
            f.write_str(what)
        } else {
            write!(f, "line {}: {}", self.line, what)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let config = BoardConfig::default();
        assert_eq!(config.uart.baudrate, 115_200);
        assert_eq!(config.i2c.frequency_hz, 400_000);
        assert_eq!(config.display.address, 0x3C);
        assert_eq!(config.buttons.debounce_ms, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_names_field() {
        let mut config = BoardConfig::default();
        config.matrix.latch_us = 10;
        assert_eq!(
            config.validate(),
            Err(ConfigError::new(0, ConfigErrorKind::OutOfRange("matrix.latch_us")))
        );

        let mut config = BoardConfig::default();
        config.display.address = 0x50;
        assert_eq!(
            config.validate().map_err(|e| e.kind),
            Err(ConfigErrorKind::OutOfRange("display.address"))
        );
    }
}
