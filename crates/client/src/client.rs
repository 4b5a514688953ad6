//! The API client.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use tracing::debug;

use chirp_protocol::constants::HTTP_REQUEST_TIMEOUT;
use chirp_protocol::notification::Notification;
use chirp_protocol::translate::{TranslationRequest, TranslationResponse};

use crate::error::ClientError;

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Client for the chirp HTTP API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl ApiClient {
    /// Creates a client for the service at `base_url`, e.g.
    /// `https://blog.example.com`. Trailing slashes are tolerated.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_REQUEST_TIMEOUT)
            .user_agent(concat!("chirp-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            http,
            base_url,
            session_cookie: None,
        })
    }

    /// Attaches a session cookie to every request, passed through verbatim
    /// (e.g. `"session=..."`).
    ///
    /// The notification and popup endpoints sit behind the service's
    /// login, so anything beyond public pages needs this.
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Fetches all notifications strictly newer than `since`, ascending by
    /// timestamp.
    pub async fn notifications(&self, since: f64) -> Result<Vec<Notification>, ClientError> {
        let url = format!("{}/notifications", self.base_url);
        let body = self.send(self.http.get(&url).query(&[("since", since)])).await?;
        let batch: Vec<Notification> = serde_json::from_str(&body)?;
        debug!(since, events = batch.len(), "fetched notifications");
        Ok(batch)
    }

    /// Fetches the profile popup fragment for `username` as raw HTML.
    pub async fn user_popup(&self, username: &str) -> Result<String, ClientError> {
        let segment = utf8_percent_encode(username, PATH_SEGMENT);
        let url = format!("{}/user/{}/popup", self.base_url, segment);
        self.send(self.http.get(&url)).await
    }

    /// Translates `text` between two language codes, server-side.
    pub async fn translate(
        &self,
        req: &TranslationRequest,
    ) -> Result<TranslationResponse, ClientError> {
        let url = format!("{}/translate", self.base_url);
        let body = self.send(self.http.post(&url).json(req)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Applies the session cookie, sends, checks the status, returns the body.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<String, ClientError> {
        let req = match &self.session_cookie {
            Some(cookie) => req.header(reqwest::header::COOKIE, cookie),
            None => req,
        };

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                code: status.as_u16(),
            });
        }
        Ok(resp.text().await?)
    }
}
