//! Public types for the poller.

use std::time::Duration;

use chirp_protocol::constants::POLL_PERIOD;

/// Configuration for the poll loop.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Time between polls. The first poll happens one full interval after
    /// start, matching the pages this layer drives.
    pub interval: Duration,
    /// Capacity of the observation event channel.
    pub event_capacity: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: POLL_PERIOD,
            event_capacity: 64,
        }
    }
}

/// Observations emitted by the poller as it applies notifications.
///
/// A lossy side channel for rendering and diagnostics; the shared
/// `PageState` is the authoritative result. Events are dropped rather
/// than awaited when the receiver falls behind (or was never taken).
#[derive(Debug, Clone, PartialEq)]
pub enum PollerEvent {
    /// An `unread_message_count` notification was applied to the badge.
    UnreadCount { count: u64 },
    /// A `task_progress` notification was dispatched. `displayed` is
    /// `false` when the page had no indicator registered for the task.
    TaskProgress {
        task_id: String,
        percent: u8,
        displayed: bool,
    },
    /// A poll cycle finished. `delivered` counts every event in the
    /// batch, recognized or not.
    CycleCompleted { delivered: usize, cursor: f64 },
    /// A poll cycle failed; the cursor was left untouched and the next
    /// cycle runs on schedule.
    CycleFailed { error: String },
}
