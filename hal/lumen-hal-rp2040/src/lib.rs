//! RP2040-specific drivers for the Lumen firmware
//!
//! Provides RP2040 implementations of the `lumen-core` hardware traits:
//!
//! - PIO-based WS2812 strip output (implements `lumen_core::traits::LedStrip`)

#![no_std]

pub mod ws2812;

pub use ws2812::PioWs2812;
