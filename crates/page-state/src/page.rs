use chirp_protocol::TaskProgress;

use crate::badge::Badge;
use crate::progress::ProgressBoard;

/// Everything on a page the live-update layer may touch.
///
/// One instance is shared between the poller (writer) and whatever renders
/// it (reader), typically as `Arc<Mutex<PageState>>`. All methods are
/// synchronous; hold the lock only for the call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    badge: Badge,
    tasks: ProgressBoard,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new unread message count (see [`Badge::set_count`]).
    pub fn set_unread_count(&mut self, count: u64) {
        self.badge.set_count(count);
    }

    /// Adds a progress indicator for a task this page shows.
    pub fn register_task(&mut self, task_id: &str) {
        self.tasks.register(task_id);
    }

    /// Applies a task progress report; `false` means no indicator existed.
    pub fn apply_task_progress(&mut self, progress: &TaskProgress) -> bool {
        self.tasks.apply(progress)
    }

    pub fn badge(&self) -> &Badge {
        &self.badge
    }

    pub fn tasks(&self) -> &ProgressBoard {
        &self.tasks
    }
}
