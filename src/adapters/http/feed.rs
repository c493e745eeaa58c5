//! HTTP calendar feed adapter

use crate::core::error::DependencyError;
use crate::core::models::CalendarEvent;
use crate::core::ports::EventFeed;

/// Calendar feed read over HTTP
///
/// Expects a JSON list of event objects with `title`, `date`, `date_utc`
/// and `url` fields.
#[derive(Debug, Clone)]
pub struct HttpEventFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpEventFeed {
    /// Create a feed reader for the given URL
    #[must_use]
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

/// Decode a feed response body into a list of events
///
/// # Errors
///
/// Returns [`DependencyError::InvalidResponse`] when the body is not a
/// JSON list of event objects.
pub fn decode_feed_body(body: &[u8]) -> Result<Vec<CalendarEvent>, DependencyError> {
    serde_json::from_slice(body).map_err(|err| DependencyError::InvalidResponse(err.to_string()))
}

impl EventFeed for HttpEventFeed {
    async fn fetch_events(&self) -> Result<Vec<CalendarEvent>, DependencyError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| DependencyError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DependencyError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| DependencyError::Transport(err.to_string()))?;
        decode_feed_body(&body)
    }
}
