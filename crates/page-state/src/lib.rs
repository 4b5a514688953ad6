//! Page UI state driven by the notification poller.
//!
//! The pieces of a page the live-update layer is allowed to touch: the
//! unread-messages badge and the per-task progress indicators. Pure
//! synchronous state; the poller writes, a renderer reads.

pub mod badge;
pub mod page;
pub mod progress;

pub use badge::Badge;
pub use page::PageState;
pub use progress::ProgressBoard;
