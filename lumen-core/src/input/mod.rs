//! Push-button input handling
//!
//! Edge interrupts only produce [`ButtonEvent`]s; all debounce state lives
//! in a single [`Debouncer`] owned by the consuming task.

pub mod button;
pub mod debounce;

pub use button::{ButtonEvent, ButtonId};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
