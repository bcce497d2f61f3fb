//! 5x5 addressable LED matrix
//!
//! The matrix is a single WS2812 chain of 25 cells. The buffer is flat:
//! cell `i` is the `i`-th LED on the wire, row-major by convention.

pub mod buffer;
pub mod cell;
pub mod glyph;

pub use buffer::{PixelBuffer, CELL_COUNT};
pub use cell::Cell;
pub use glyph::{glyph_mask, Digit, MatrixError, GLYPHS};
