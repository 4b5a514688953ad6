//! Periodic notification polling for chirp pages.
//!
//! The web pages this layer replaces re-fetched `/notifications` from a
//! timer buried in a script tag. Here the loop is an explicit [`Poller`]:
//! it owns the feed [`Cursor`], mutates an injected
//! [`PageState`](chirp_page_state::PageState), fetches through the
//! [`NotificationSource`] seam, and runs as a cancellable tokio task
//! behind a [`PollerHandle`].

pub mod cursor;
pub mod error;
pub mod poller;
pub mod source;
pub mod types;

pub use cursor::Cursor;
pub use error::PollError;
pub use poller::{Poller, PollerHandle};
pub use source::NotificationSource;
pub use types::{PollerConfig, PollerEvent};
