//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod strip;

pub use display::{DisplayError, TextDisplay, TextDisplayExt};
pub use strip::LedStrip;
