//! Feed cursor: high-water mark of consumed notifications.

/// The timestamp of the newest notification seen so far.
///
/// The server keys the feed on `since` and returns only strictly newer
/// events, so this is the client's entire read position. It starts at 0.0
/// ("everything you have") and never moves backwards. It is not persisted:
/// a fresh poller re-reads recent events, and dispatch is set-to-value, so
/// replays are harmless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor(f64);

impl Cursor {
    /// A cursor that has seen nothing.
    pub fn start() -> Self {
        Self(0.0)
    }

    /// Current position, suitable for the `since` query parameter.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Moves the cursor forward to `timestamp`; older values (and NaN)
    /// are ignored.
    pub fn advance(&mut self, timestamp: f64) {
        if timestamp > self.0 {
            self.0 = timestamp;
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::start()
    }
}
