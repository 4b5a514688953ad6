//! The notification poll loop.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use chirp_page_state::PageState;
use chirp_protocol::notification::{EventKind, Notification};

use crate::cursor::Cursor;
use crate::source::NotificationSource;
use crate::types::{PollerConfig, PollerEvent};

/// Periodic notification poller.
///
/// Owns the feed cursor and mutates the page state it was handed at
/// construction. Build one with a [`NotificationSource`] and a shared
/// [`PageState`], then [`spawn`](Poller::spawn) it; the returned
/// [`PollerHandle`] stops the loop on request or on drop.
pub struct Poller<S> {
    source: S,
    page: Arc<Mutex<PageState>>,
    config: PollerConfig,
    cursor: Cursor,
}

impl<S: NotificationSource + 'static> Poller<S> {
    /// Creates a poller that starts from the beginning of the feed.
    pub fn new(source: S, page: Arc<Mutex<PageState>>, config: PollerConfig) -> Self {
        Self {
            source,
            page,
            config,
            cursor: Cursor::start(),
        }
    }

    /// Starts the poll loop on the current tokio runtime.
    ///
    /// The first fetch happens one full interval after this call.
    pub fn spawn(self) -> PollerHandle {
        let cancel = CancellationToken::new();
        let (events_tx, events_rx) = mpsc::channel(self.config.event_capacity);

        let c = cancel.clone();
        let task = tokio::spawn(async move {
            self.run(events_tx, c).await;
        });

        PollerHandle {
            cancel,
            task: Some(task),
            events_rx: Some(events_rx),
        }
    }

    async fn run(mut self, events_tx: mpsc::Sender<PollerEvent>, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.config.interval);
        // A fetch slower than the interval delays the next poll instead of
        // bursting a catch-up poll right behind it.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval.tick().await; // Skip immediate first tick.

        info!(interval = ?self.config.interval, "poller started");

        loop {
            // Biased: a stop() during a slow fetch leaves a tick already
            // due on re-entry, and cancellation must win over it.
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {
                    self.poll_once(&events_tx).await;
                }
            }
        }

        debug!(cursor = self.cursor.value(), "poller stopped");
    }

    /// One poll cycle: fetch everything newer than the cursor, apply it in
    /// order.
    ///
    /// A failed fetch changes nothing; the next cycle runs on schedule
    /// with the same cursor. The regular cadence is the retry policy.
    async fn poll_once(&mut self, events_tx: &mpsc::Sender<PollerEvent>) {
        let since = self.cursor.value();
        let batch = match self.source.fetch_since(since).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(since, error = %e, "notification poll failed");
                Self::emit(
                    events_tx,
                    PollerEvent::CycleFailed {
                        error: e.to_string(),
                    },
                );
                return;
            }
        };

        let delivered = batch.len();
        for notification in &batch {
            self.dispatch(notification, events_tx).await;
            // Every event moves the cursor, recognized or not; otherwise
            // an unknown kind would be re-fetched forever.
            self.cursor.advance(notification.timestamp);
        }

        Self::emit(
            events_tx,
            PollerEvent::CycleCompleted {
                delivered,
                cursor: self.cursor.value(),
            },
        );
    }

    async fn dispatch(&self, notification: &Notification, events_tx: &mpsc::Sender<PollerEvent>) {
        match notification.kind() {
            EventKind::UnreadMessageCount => {
                let count = notification.unread_count();
                self.page.lock().await.set_unread_count(count);
                Self::emit(events_tx, PollerEvent::UnreadCount { count });
            }
            EventKind::TaskProgress => {
                let progress = match notification.task_progress() {
                    Ok(progress) => progress,
                    Err(e) => {
                        debug!(error = %e, "malformed task_progress payload");
                        return;
                    }
                };
                let percent = progress.percent();
                let displayed = self.page.lock().await.apply_task_progress(&progress);
                if !displayed {
                    debug!(task_id = %progress.task_id, "no indicator registered for task");
                }
                Self::emit(
                    events_tx,
                    PollerEvent::TaskProgress {
                        task_id: progress.task_id,
                        percent,
                        displayed,
                    },
                );
            }
            EventKind::Unknown => {
                debug!(name = %notification.name, "ignoring unrecognized notification");
            }
        }
    }

    /// Best-effort emit; the observation stream is lossy when unread.
    fn emit(events_tx: &mpsc::Sender<PollerEvent>, event: PollerEvent) {
        if let Err(e) = events_tx.try_send(event) {
            debug!(error = %e, "dropping poller event");
        }
    }
}

/// Handle to a running poller.
///
/// Dropping the handle cancels the loop: no further fetch begins once the
/// token is cancelled. Call [`stop`](PollerHandle::stop) and then
/// [`stopped`](PollerHandle::stopped) to wind down deterministically.
pub struct PollerHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
    events_rx: Option<mpsc::Receiver<PollerEvent>>,
}

impl PollerHandle {
    /// Takes the observation event stream. Yields `None` after the first
    /// call.
    pub fn take_events(&mut self) -> Option<mpsc::Receiver<PollerEvent>> {
        self.events_rx.take()
    }

    /// Signals the loop to stop. Idempotent, returns immediately.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Stops the loop and waits for it to exit.
    pub async fn stopped(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
