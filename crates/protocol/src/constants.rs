use std::time::Duration;

/// How often a client asks the server for new notifications.
///
/// Matches the cadence the web pages poll at; the service is sized around
/// clients arriving at roughly this rate, so don't go lower without a
/// server-side reason.
pub const POLL_PERIOD: Duration = Duration::from_secs(10);

/// Per-request timeout for API calls.
///
/// Comfortably above normal response times. The poll loop serializes
/// fetches, so a request that drags past the next tick delays it rather
/// than overlapping it.
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Upper bound for displayed task progress.
pub const PROGRESS_MAX: u8 = 100;
