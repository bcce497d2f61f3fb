//! Embassy async tasks
//!
//! Each task owns its peripherals and communicates via channels/signals.

pub mod buttons;
pub mod console_tx;
pub mod display;
pub mod indicators;
pub mod matrix;
pub mod serial_rx;

pub use buttons::button_task;
pub use console_tx::console_tx_task;
pub use display::display_task;
pub use indicators::{indicator_task, IndicatorPins};
pub use matrix::matrix_task;
pub use serial_rx::serial_rx_task;
