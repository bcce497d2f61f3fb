//! Pixel buffer for the LED matrix
//!
//! Holds the desired color of every cell between transmissions. The buffer
//! is a plain owned value: whichever task drives the strip owns it, so no
//! locking is involved.

use super::cell::Cell;
use super::glyph::{glyph_mask, Digit, MatrixError};
use crate::traits::LedStrip;

/// Number of cells in the matrix (5x5)
pub const CELL_COUNT: usize = 25;

/// Per-cell color state for the whole matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    cells: [Cell; CELL_COUNT],
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelBuffer {
    /// Create a buffer with every cell off
    pub const fn new() -> Self {
        Self {
            cells: [Cell::OFF; CELL_COUNT],
        }
    }

    /// Set one cell
    ///
    /// Indices past the end of the matrix are ignored.
    pub fn set_cell(&mut self, index: usize, r: u8, g: u8, b: u8) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::new(r, g, b);
        }
    }

    /// Read one cell, `None` if out of range
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in chain order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Turn every cell off
    pub fn clear(&mut self) {
        self.cells = [Cell::OFF; CELL_COUNT];
    }

    /// Light the cells of a digit glyph in white
    ///
    /// Cells outside the glyph are left as they are; call [`clear`] first
    /// for a clean frame. An invalid digit leaves the buffer untouched.
    ///
    /// [`clear`]: PixelBuffer::clear
    pub fn paint_digit(&mut self, digit: u8) -> Result<(), MatrixError> {
        let mask = glyph_mask(digit)?;
        self.paint_mask(mask, Cell::WHITE);
        Ok(())
    }

    /// Light the cells of a digit glyph in `color`
    pub fn paint_glyph(&mut self, digit: Digit, color: Cell) {
        self.paint_mask(digit.mask(), color);
    }

    fn paint_mask(&mut self, mask: u32, color: Cell) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                *cell = color;
            }
        }
    }

    /// Encoded words in chain order
    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().map(|cell| cell.to_wire())
    }

    /// Push the whole buffer to the strip, cell 0 first
    ///
    /// Blocks on driver backpressure; always pushes exactly
    /// [`CELL_COUNT`] words. Returns once the strip has been flushed, so
    /// the latch gap can be timed from the return.
    pub fn transmit<S: LedStrip>(&self, strip: &mut S) {
        for word in self.words() {
            strip.push_blocking(word);
        }
        strip.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::glyph::GLYPHS;
    use heapless::Vec;
    use proptest::prelude::*;

    /// Strip that records every pushed word
    #[derive(Default)]
    struct RecordingStrip {
        words: Vec<u32, 64>,
        /// Number of words queued when each flush happened
        flushed_at: Vec<usize, 4>,
    }

    impl LedStrip for RecordingStrip {
        fn push_blocking(&mut self, word: u32) {
            self.words.push(word).unwrap();
        }

        fn flush(&mut self) {
            self.flushed_at.push(self.words.len()).unwrap();
        }
    }

    fn lit_cells(buffer: &PixelBuffer) -> u32 {
        buffer
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::WHITE)
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    #[test]
    fn test_new_is_all_off() {
        let buffer = PixelBuffer::new();
        assert!(buffer.cells().iter().all(|cell| cell.is_off()));
    }

    #[test]
    fn test_set_cell_out_of_range_ignored() {
        let mut buffer = PixelBuffer::new();
        buffer.set_cell(3, 1, 2, 3);
        let before = buffer.clone();

        buffer.set_cell(CELL_COUNT, 255, 255, 255);
        buffer.set_cell(usize::MAX, 255, 255, 255);
        assert_eq!(buffer, before);
        assert_eq!(buffer.cell(CELL_COUNT), None);
    }

    #[test]
    fn test_paint_does_not_clear() {
        let mut buffer = PixelBuffer::new();
        buffer.set_cell(1, 10, 20, 30);

        // Bit 1 of the zero glyph is clear, so cell 1 keeps its color
        assert_eq!(GLYPHS[0] & (1 << 1), 0);
        buffer.paint_digit(0).unwrap();
        assert_eq!(buffer.cell(1), Some(Cell::new(10, 20, 30)));
        assert_eq!(buffer.cell(0), Some(Cell::WHITE));
    }

    #[test]
    fn test_paint_invalid_digit_is_error() {
        let mut buffer = PixelBuffer::new();
        buffer.set_cell(0, 9, 9, 9);
        let before = buffer.clone();

        assert_eq!(buffer.paint_digit(10), Err(MatrixError::InvalidDigit(10)));
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_paint_digit_uses_glyph_mask() {
        for digit in 0..10u8 {
            let mut buffer = PixelBuffer::new();
            buffer.paint_digit(digit).unwrap();
            assert_eq!(Ok(lit_cells(&buffer)), glyph_mask(digit));
        }
    }

    #[test]
    fn test_paint_glyph_color() {
        let mut buffer = PixelBuffer::new();
        let red = Cell::new(255, 0, 0);
        buffer.paint_glyph(Digit::try_from(1).unwrap(), red);

        for (i, cell) in buffer.cells().iter().enumerate() {
            let lit = GLYPHS[1] & (1 << i) != 0;
            assert_eq!(*cell, if lit { red } else { Cell::OFF });
        }
    }

    #[test]
    fn test_transmit_zero_glyph() {
        let mut buffer = PixelBuffer::new();
        buffer.clear();
        buffer.paint_digit(0).unwrap();

        let mut strip = RecordingStrip::default();
        buffer.transmit(&mut strip);

        let mask = 0b01110100011001110101u32;
        assert_eq!(strip.words.len(), CELL_COUNT);
        for (i, word) in strip.words.iter().enumerate() {
            let expected = if mask & (1 << i) != 0 { 0xFFFF_FF00 } else { 0 };
            assert_eq!(*word, expected, "word {}", i);
        }
    }

    #[test]
    fn test_transmit_flushes_after_last_word() {
        let mut buffer = PixelBuffer::new();
        buffer.paint_digit(1).unwrap();

        let mut strip = RecordingStrip::default();
        buffer.transmit(&mut strip);
        assert_eq!(strip.flushed_at.as_slice(), &[CELL_COUNT]);

        // Back-to-back frames stay separated by a flush
        buffer.clear();
        buffer.transmit(&mut strip);
        assert_eq!(strip.flushed_at.as_slice(), &[CELL_COUNT, 2 * CELL_COUNT]);
    }

    #[test]
    fn test_transmit_through_mut_ref() {
        let buffer = PixelBuffer::new();
        let mut strip = RecordingStrip::default();
        {
            let mut by_ref = &mut strip;
            buffer.transmit(&mut by_ref);
        }
        assert_eq!(strip.words.len(), CELL_COUNT);
        assert_eq!(strip.flushed_at.as_slice(), &[CELL_COUNT]);
    }

    proptest! {
        #[test]
        fn prop_set_cell_touches_one(index in 0..CELL_COUNT, r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let mut buffer = PixelBuffer::new();
            buffer.paint_digit(8).unwrap();
            let before = buffer.clone();

            buffer.set_cell(index, r, g, b);
            prop_assert_eq!(buffer.cell(index), Some(Cell::new(r, g, b)));
            for i in (0..CELL_COUNT).filter(|i| *i != index) {
                prop_assert_eq!(buffer.cell(i), before.cell(i));
            }
        }

        #[test]
        fn prop_set_cell_past_end_is_noop(index in CELL_COUNT..usize::MAX, r in any::<u8>()) {
            let mut buffer = PixelBuffer::new();
            buffer.paint_digit(4).unwrap();
            let before = buffer.clone();

            buffer.set_cell(index, r, r, r);
            prop_assert_eq!(buffer, before);
        }

        #[test]
        fn prop_clear_resets_everything(writes in proptest::collection::vec((0..CELL_COUNT, any::<u8>()), 0..40)) {
            let mut buffer = PixelBuffer::new();
            for (index, value) in writes {
                buffer.set_cell(index, value, value, value);
            }

            buffer.clear();
            prop_assert!(buffer.cells().iter().all(|cell| cell.is_off()));
        }

        #[test]
        fn prop_paint_matches_mask(digit in 0u8..10) {
            let mut buffer = PixelBuffer::new();
            buffer.clear();
            buffer.paint_digit(digit).unwrap();

            prop_assert_eq!(lit_cells(&buffer), GLYPHS[digit as usize]);
            for (i, cell) in buffer.cells().iter().enumerate() {
                if GLYPHS[digit as usize] & (1 << i) == 0 {
                    prop_assert!(cell.is_off());
                }
            }
        }

        #[test]
        fn prop_transmit_in_index_order(seed in proptest::collection::vec(any::<(u8, u8, u8)>(), CELL_COUNT)) {
            let mut buffer = PixelBuffer::new();
            for (i, (r, g, b)) in seed.iter().enumerate() {
                buffer.set_cell(i, *r, *g, *b);
            }

            let mut strip = RecordingStrip::default();
            buffer.transmit(&mut strip);

            prop_assert_eq!(strip.words.len(), CELL_COUNT);
            for (i, word) in strip.words.iter().enumerate() {
                prop_assert_eq!(Cell::from_wire(*word), buffer.cells()[i]);
            }
        }
    }
}
