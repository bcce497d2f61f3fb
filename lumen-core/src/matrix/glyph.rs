//! Digit glyph table
//!
//! Each glyph is a 25-bit mask; bit `i` set means cell `i` is lit.

/// Glyph masks for digits 0-9
///
/// Some digits share a pattern (6/8 and 3/9); the table is kept as the
/// board has always rendered it.
#[rustfmt::skip]
pub static GLYPHS: [u32; 10] = [
    0b01110100011001110101, // 0
    0b00100101110100101110, // 1
    0b01110000011100001111, // 2
    0b01110100011100101110, // 3
    0b00011011111100100010, // 4
    0b11110100011100101110, // 5
    0b01110100011110101110, // 6
    0b01110000100010001000, // 7
    0b01110100011110101110, // 8
    0b01110100011100101110, // 9
];

/// Errors from matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixError {
    /// Digit outside 0-9
    InvalidDigit(u8),
}

/// A decimal digit, 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Parse an ASCII character `'0'..='9'`
    pub fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_digit() {
            Some(Self(byte - b'0'))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Glyph mask for this digit
    pub fn mask(self) -> u32 {
        GLYPHS[self.0 as usize]
    }
}

impl TryFrom<u8> for Digit {
    type Error = MatrixError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(MatrixError::InvalidDigit(value))
        }
    }
}

/// Look up the glyph mask for a raw digit value
pub fn glyph_mask(digit: u8) -> Result<u32, MatrixError> {
    Digit::try_from(digit).map(Digit::mask)
}
