//! Repository trait for aggregated click analytics.

use crate::domain::entities::AnalyticsPayload;
use crate::error::LoadError;
use async_trait::async_trait;

/// Source of aggregated analytics for a short link.
///
/// Each call is an independent attempt: implementations must not retry or
/// cache.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpAnalyticsRepository`] - `GET /api/analytics/{code}`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Fetches the analytics payload for `code`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Fetch`] when the service answers with a non-2xx status
    /// - [`LoadError::Decode`] when the body is not a valid analytics document
    /// - [`LoadError::Transport`] when no response was received
    async fn fetch_analytics(&self, code: &str) -> Result<AnalyticsPayload, LoadError>;
}
