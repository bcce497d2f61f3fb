//! Time-based button debounce

use super::button::{ButtonEvent, BUTTON_COUNT};

/// Default lockout after an accepted press
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// Per-button debounce filter
///
/// A press is accepted if it is the first one seen for that button, or
/// if strictly more than the lockout has elapsed since the last accepted
/// press. Rejected presses do not extend the lockout.
#[derive(Debug, Clone)]
pub struct Debouncer {
    lockout_ms: u32,
    last_accepted: [Option<u32>; BUTTON_COUNT],
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub const fn new(lockout_ms: u32) -> Self {
        Self {
            lockout_ms,
            last_accepted: [None; BUTTON_COUNT],
        }
    }

    pub fn lockout_ms(&self) -> u32 {
        self.lockout_ms
    }

    /// Filter one event, returns true if it counts as a press
    pub fn accept(&mut self, event: ButtonEvent) -> bool {
        let slot = &mut self.last_accepted[event.button.index()];

        let accepted = match *slot {
            None => true,
            // Wrapping difference keeps working across the u32 rollover
            Some(last) => event.at_ms.wrapping_sub(last) > self.lockout_ms,
        };

        if accepted {
            *slot = Some(event.at_ms);
        }
        accepted
    }
}
