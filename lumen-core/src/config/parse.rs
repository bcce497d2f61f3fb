//! Minimal parser for `board.toml`
//!
//! Handles only the subset the board file uses, without allocation:
//!
//! - `[section]` headers
//! - `key = value` with unsigned integer values (decimal or `0x` hex,
//!   `_` separators allowed)
//! - `#` comments, full-line or trailing
//!
//! Anything else is an error so typos do not silently fall back to
//! defaults. Full TOML syntax is checked at build time.

use super::board::{BoardConfig, ConfigError, ConfigErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Uart,
    I2c,
    Display,
    Buttons,
    Matrix,
}

/// Parse and validate a board configuration
///
/// Keys that are not present keep their default values.
pub fn parse_board_config(input: &str) -> Result<BoardConfig, ConfigError> {
    let mut config = BoardConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let err = |kind| ConfigError::new(line_no, kind);

        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or(err(ConfigErrorKind::InvalidSection))?;
            section = parse_section(name.trim()).ok_or(err(ConfigErrorKind::UnknownSection))?;
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or(err(ConfigErrorKind::InvalidLine))?;
        let key = key.trim();
        let value = parse_u32(value.trim()).ok_or(err(ConfigErrorKind::InvalidValue))?;

        match (section, key) {
            (Section::Root, _) => return Err(err(ConfigErrorKind::KeyOutsideSection)),
            (Section::Uart, "baudrate") => config.uart.baudrate = value,
            (Section::I2c, "frequency_hz") => config.i2c.frequency_hz = value,
            (Section::Display, "address") => {
                config.display.address =
                    u8::try_from(value).map_err(|_| err(ConfigErrorKind::InvalidValue))?;
            }
            (Section::Buttons, "debounce_ms") => config.buttons.debounce_ms = value,
            (Section::Matrix, "latch_us") => config.matrix.latch_us = value,
            _ => return Err(err(ConfigErrorKind::UnknownKey)),
        }
    }

    config.validate()?;
    Ok(config)
}

fn parse_section(name: &str) -> Option<Section> {
    match name {
        "uart" => Some(Section::Uart),
        "i2c" => Some(Section::I2c),
        "display" => Some(Section::Display),
        "buttons" => Some(Section::Buttons),
        "matrix" => Some(Section::Matrix),
        _ => None,
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse an unsigned integer, decimal or `0x`-prefixed hex
fn parse_u32(text: &str) -> Option<u32> {
    let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return None;
    }

    let mut value: u32 = 0;
    for ch in digits.chars().filter(|c| *c != '_') {
        let digit = ch.to_digit(radix)?;
        value = value.checked_mul(radix)?.checked_add(digit)?;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = "
# Board tunables
[uart]
baudrate = 9_600

[i2c]
frequency_hz = 100_000   # standard mode

[display]
address = 0x3D

[buttons]
debounce_ms = 150

[matrix]
latch_us = 80
";

    #[test]
    fn test_parse_full_file() {
        let config = parse_board_config(BOARD).unwrap();
        assert_eq!(config.uart.baudrate, 9_600);
        assert_eq!(config.i2c.frequency_hz, 100_000);
        assert_eq!(config.display.address, 0x3D);
        assert_eq!(config.buttons.debounce_ms, 150);
        assert_eq!(config.matrix.latch_us, 80);
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(parse_board_config(""), Ok(BoardConfig::default()));
        assert_eq!(parse_board_config("# nothing\n\n"), Ok(BoardConfig::default()));
    }

    #[test]
    fn test_partial_keeps_defaults() {
        let config = parse_board_config("[buttons]\ndebounce_ms = 50\n").unwrap();
        assert_eq!(config.buttons.debounce_ms, 50);
        assert_eq!(config.uart, BoardConfig::default().uart);
    }

    #[test]
    fn test_error_lines() {
        let err = parse_board_config("[uart]\nbaud = 9600\n").unwrap_err();
        assert_eq!(err, ConfigError::new(2, ConfigErrorKind::UnknownKey));

        let err = parse_board_config("\n\n[leds]\n").unwrap_err();
        assert_eq!(err, ConfigError::new(3, ConfigErrorKind::UnknownSection));

        let err = parse_board_config("[uart\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::InvalidSection);

        let err = parse_board_config("baudrate = 9600\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::KeyOutsideSection);

        let err = parse_board_config("[uart]\nbaudrate\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::InvalidLine);
    }

    #[test]
    fn test_invalid_values() {
        for text in [
            "[uart]\nbaudrate = fast",
            "[uart]\nbaudrate = -1",
            "[uart]\nbaudrate = 99999999999",
            "[uart]\nbaudrate = \"9600\"",
            "[display]\naddress = 0x1234",
            "[matrix]\nlatch_us = 0x",
        ] {
            let err = parse_board_config(text).unwrap_err();
            assert_eq!(err.kind, ConfigErrorKind::InvalidValue, "{}", text);
        }
    }

    #[test]
    fn test_range_checked() {
        let err = parse_board_config("[matrix]\nlatch_us = 5\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::OutOfRange("matrix.latch_us"));
    }

    #[test]
    fn test_parse_u32() {
        assert_eq!(parse_u32("0"), Some(0));
        assert_eq!(parse_u32("115_200"), Some(115_200));
        assert_eq!(parse_u32("0x3c"), Some(0x3C));
        assert_eq!(parse_u32("4294967295"), Some(u32::MAX));
        assert_eq!(parse_u32("4294967296"), None);
        assert_eq!(parse_u32("_1"), None);
        assert_eq!(parse_u32(""), None);
    }

    #[test]
    fn test_firmware_board_file_parses() {
        let text = include_str!("../../../lumen-firmware/board.toml");
        assert!(parse_board_config(text).is_ok());
    }
}
