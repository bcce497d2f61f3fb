//! Single LED cell and its wire encoding
//!
//! WS2812 LEDs latch 24 bits per cell in GRB order, most significant bit
//! first. The strip driver shifts words out MSB-first and autopulls after
//! 24 bits, so a cell occupies the upper three bytes of a 32-bit word:
//!
//! ```text
//! 31      24 23      16 15       8 7        0
//! ┌─────────┬──────────┬──────────┬─────────┐
//! │  green  │   red    │   blue   │  (zero) │
//! └─────────┴──────────┴──────────┴─────────┘
//! ```

const GREEN_SHIFT: u32 = 24;
const RED_SHIFT: u32 = 16;
const BLUE_SHIFT: u32 = 8;

/// Color state of one addressable LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Cell {
    /// All channels off
    pub const OFF: Cell = Cell::new(0, 0, 0);

    /// All channels at full intensity
    pub const WHITE: Cell = Cell::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the word the strip driver consumes
    pub const fn to_wire(self) -> u32 {
        ((self.g as u32) << GREEN_SHIFT)
            | ((self.r as u32) << RED_SHIFT)
            | ((self.b as u32) << BLUE_SHIFT)
    }

    /// Unpack a strip word; the reserved low byte is ignored
    pub const fn from_wire(word: u32) -> Self {
        Self {
            r: (word >> RED_SHIFT) as u8,
            g: (word >> GREEN_SHIFT) as u8,
            b: (word >> BLUE_SHIFT) as u8,
        }
    }

    pub const fn is_off(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}
