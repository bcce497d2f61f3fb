//! Board-agnostic core logic for the Lumen firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - LED matrix pixel buffer, glyph table and wire encoding
//! - Hardware abstraction traits (LED strip, text display)
//! - Button debounce and indicator LED state
//! - Serial character classification
//! - Board configuration types and parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod leds;
pub mod matrix;
pub mod serial;
pub mod traits;
