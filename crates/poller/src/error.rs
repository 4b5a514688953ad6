//! Poller error type.

/// Errors surfaced through the [`NotificationSource`] seam.
///
/// [`NotificationSource`]: crate::source::NotificationSource
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// The source could not produce a batch, whether from a network
    /// failure, an HTTP error status, or an undecodable body. The poll
    /// loop treats them all the same: skip the cycle, keep the cursor.
    #[error("source error: {0}")]
    Source(String),
}

impl PollError {
    /// Flattens any displayable error into a source error.
    pub fn source(err: impl std::fmt::Display) -> Self {
        Self::Source(err.to_string())
    }
}
