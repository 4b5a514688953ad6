//! HTTP client for the chirp web service.
//!
//! [`ApiClient`] covers the endpoints the live-update layer touches:
//! the notification feed, user profile popups, and post translation.
//! Authentication is ambient: callers with a session cookie set it once
//! and it rides along on every request.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ClientError;
