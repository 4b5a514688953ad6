//! Source seam for the poll loop.

use std::future::Future;
use std::pin::Pin;

use chirp_protocol::notification::Notification;

use crate::error::PollError;

/// Where notifications come from.
///
/// The application implements this over the real API client (flattening
/// its error into [`PollError`]); tests script batches without a server.
/// Using a trait keeps the poll loop decoupled from HTTP and testable
/// against exact sequences.
pub trait NotificationSource: Send + Sync {
    /// Fetches all notifications strictly newer than `since`, ascending
    /// by timestamp.
    fn fetch_since(
        &self,
        since: f64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Notification>, PollError>> + Send + '_>>;
}
