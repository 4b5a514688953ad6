use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::PROGRESS_MAX;

/// A single entry in the notification feed.
///
/// The server emits these from `GET /notifications`: `name` selects the
/// payload shape carried in `data`, and `timestamp` is fractional seconds
/// since the Unix epoch, ascending within a response. The set of names is
/// open; the server adds kinds without versioning, so clients must
/// tolerate ones they do not know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub name: String,
    #[serde(default)]
    pub data: Value,
    pub timestamp: f64,
}

impl Notification {
    /// Classifies this notification by its `name`.
    pub fn kind(&self) -> EventKind {
        EventKind::from_name(&self.name)
    }

    /// Interprets `data` as an unread message count.
    ///
    /// The server sends a plain JSON integer. Floats are accepted and
    /// truncated; anything non-numeric (including a missing `data`) reads
    /// as zero.
    pub fn unread_count(&self) -> u64 {
        if let Some(n) = self.data.as_u64() {
            n
        } else if let Some(f) = self.data.as_f64() {
            if f.is_finite() && f > 0.0 { f as u64 } else { 0 }
        } else {
            0
        }
    }

    /// Parses `data` as a task progress payload.
    pub fn task_progress(&self) -> Result<TaskProgress, serde_json::Error> {
        serde_json::from_value(self.data.clone())
    }
}

/// Known notification kinds.
///
/// [`EventKind::from_name`] is the only place the wire strings are
/// interpreted. Anything unrecognized maps to [`EventKind::Unknown`] and
/// is skipped by dispatch; the feed cursor still advances past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The number of unread private messages changed.
    UnreadMessageCount,
    /// A background task reported progress.
    TaskProgress,
    /// Forward compatibility: any name this client does not know.
    Unknown,
}

impl EventKind {
    /// Maps a wire `name` to its kind.
    pub fn from_name(name: &str) -> Self {
        match name {
            "unread_message_count" => Self::UnreadMessageCount,
            "task_progress" => Self::TaskProgress,
            _ => Self::Unknown,
        }
    }
}

/// Payload of a `task_progress` notification.
///
/// The server reports progress as a float nominally in 0 to 100. Export
/// jobs round to whole percent before emitting, but other tasks may not,
/// and a buggy worker can send anything; display goes through
/// [`percent`].
///
/// [`percent`]: TaskProgress::percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskProgress {
    pub task_id: String,
    pub progress: f64,
}

impl TaskProgress {
    /// Progress as a display percentage, rounded and clamped to
    /// `0..=PROGRESS_MAX`. Non-finite values read as 0.
    pub fn percent(&self) -> u8 {
        if !self.progress.is_finite() {
            return 0;
        }
        self.progress.round().clamp(0.0, PROGRESS_MAX as f64) as u8
    }
}
