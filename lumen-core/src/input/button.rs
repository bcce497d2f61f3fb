//! Button identities and press events

/// Number of user buttons on the board
pub const BUTTON_COUNT: usize = 2;

/// User buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Button A, toggles the green LED
    A,
    /// Button B, toggles the blue LED
    B,
}

impl ButtonId {
    /// Slot index for per-button state tables
    pub const fn index(self) -> usize {
        match self {
            ButtonId::A => 0,
            ButtonId::B => 1,
        }
    }
}

/// A falling edge seen on a button input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: ButtonId,
    /// Milliseconds since boot (wraps after ~49 days)
    pub at_ms: u32,
}

impl ButtonEvent {
    pub const fn new(button: ButtonId, at_ms: u32) -> Self {
        Self { button, at_ms }
    }
}
