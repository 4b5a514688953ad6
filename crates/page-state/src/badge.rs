/// The unread-messages badge next to the Messages link.
///
/// Starts hidden with a count of 0. Visibility only ever rises here: a
/// positive count shows the badge, while a zero count updates the number
/// but leaves an already-visible badge showing. The asymmetry matches the
/// page this drives, where the badge clears on the next full page load,
/// not live.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Badge {
    count: u64,
    visible: bool,
}

impl Badge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new unread count, raising visibility for positive counts.
    pub fn set_count(&mut self, count: u64) {
        self.count = count;
        if count > 0 {
            self.visible = true;
        }
    }

    /// The current count, whether or not the badge is shown.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether the badge is shown.
    pub fn visible(&self) -> bool {
        self.visible
    }
}
