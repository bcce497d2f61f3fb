//! Configuration types
//!
//! Board tunables, parsed from the embedded `board.toml` at boot.

pub mod board;
pub mod parse;

pub use board::*;
pub use parse::parse_board_config;
