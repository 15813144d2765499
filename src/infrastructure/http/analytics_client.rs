//! HTTP client for the analytics endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::AnalyticsPayload;
use crate::domain::repositories::AnalyticsRepository;
use crate::error::LoadError;

/// Fetches analytics with `GET {base}/api/analytics/{code}`.
///
/// The code is appended as a single percent-encoded path segment, so codes
/// containing `/` or `?` cannot escape the endpoint. Any path already on
/// the base URL is kept as a prefix.
pub struct HttpAnalyticsRepository {
    client: Client,
    base_url: Url,
}

impl HttpAnalyticsRepository {
    /// Builds a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` cannot carry a path (e.g. `mailto:`)
    /// or the TLS backend fails to initialize.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, LoadError> {
        if base_url.cannot_be_a_base() {
            return Err(LoadError::transport(format!(
                "analytics base URL '{base_url}' cannot carry a path"
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("shortlink-dashboard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Full endpoint URL for `code`.
    pub fn endpoint(&self, code: &str) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL always has path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "analytics", code]);
        }
        url
    }
}

#[async_trait]
impl AnalyticsRepository for HttpAnalyticsRepository {
    async fn fetch_analytics(&self, code: &str) -> Result<AnalyticsPayload, LoadError> {
        let url = self.endpoint(code);
        debug!(%url, "GET analytics");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(code, status = status.as_u16(), "analytics endpoint rejected request");
            return Err(LoadError::Fetch {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::transport(format!("failed to read response body: {e}")))?;

        let payload = serde_json::from_slice(&body)?;
        Ok(payload)
    }
}
