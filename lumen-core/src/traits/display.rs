//! Text display trait for the status OLED

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus error talking to the display controller
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Line-oriented text display
///
/// Drawing goes to a frame buffer; nothing is visible until [`flush`]
/// is called.
///
/// [`flush`]: TextDisplay::flush
pub trait TextDisplay {
    /// Blank the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the start of a character row (0-based)
    fn write_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError>;

    /// Send the frame buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}

/// Helper for the common "replace everything with one message" case
pub trait TextDisplayExt: TextDisplay {
    /// Clear, draw `text` on the first row and flush
    fn show(&mut self, text: &str) -> Result<(), DisplayError> {
        self.clear()?;
        self.write_line(0, text)?;
        self.flush()
    }
}

// Blanket implementation for all TextDisplay types
impl<T: TextDisplay> TextDisplayExt for T {}
