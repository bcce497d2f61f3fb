//! Addressable LED strip output

/// Word-at-a-time sink for a single-wire LED strip driver
///
/// Bit timing and the latch (reset) pulse are the implementation's
/// concern; callers only enqueue encoded words in chain order.
pub trait LedStrip {
    /// Enqueue one encoded cell
    ///
    /// Blocks until the driver's queue accepts the word. Returns once the
    /// word is queued, not once it has been clocked out.
    fn push_blocking(&mut self, word: u32);

    /// Block until every queued word has left the data pin
    ///
    /// The latch (reset) gap only starts once the line is idle, so frame
    /// pacing must be measured from here.
    fn flush(&mut self) {}
}

impl<T: LedStrip + ?Sized> LedStrip for &mut T {
    fn push_blocking(&mut self, word: u32) {
        (**self).push_blocking(word)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}
