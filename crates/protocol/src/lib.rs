//! Wire types shared by the chirp client crates.
//!
//! Everything that crosses the HTTP boundary lives here: the notification
//! feed entries, the task-progress payload, and the translation
//! request/response shapes. No I/O, just serde types plus the constants
//! both sides of the boundary agree on.

pub mod constants;
pub mod notification;
pub mod translate;

pub use constants::{HTTP_REQUEST_TIMEOUT, POLL_PERIOD, PROGRESS_MAX};
pub use notification::{EventKind, Notification, TaskProgress};
pub use translate::{TranslationRequest, TranslationResponse};
