//! Bridges the HTTP client to the poller's source seam.

use std::future::Future;
use std::pin::Pin;

use chirp_client::ApiClient;
use chirp_poller::{NotificationSource, PollError};
use chirp_protocol::Notification;

/// [`NotificationSource`] over a live chirp service.
pub struct HttpSource {
    client: ApiClient,
}

impl HttpSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl NotificationSource for HttpSource {
    fn fetch_since(
        &self,
        since: f64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Notification>, PollError>> + Send + '_>> {
        Box::pin(async move {
            self.client
                .notifications(since)
                .await
                .map_err(PollError::source)
        })
    }
}
