//! Error types for loading analytics and drawing dashboard charts.
//!
//! Errors are grouped by where they originate:
//!
//! - [`LoadError`] - the analytics payload could not be obtained
//! - [`RenderError`] - a chart widget could not be created or updated
//! - [`DashboardError`] - what a dashboard refresh hands back to its caller

use thiserror::Error;

/// Failure to obtain an analytics payload for a short code.
///
/// Every variant is terminal for the attempt that produced it. Nothing is
/// retried automatically; the dashboard keeps its last good state.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The analytics endpoint answered with a non-2xx status.
    #[error("analytics endpoint returned HTTP {status}")]
    Fetch { status: u16 },

    /// The response body was not a valid analytics document.
    #[error("analytics response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request never produced a response (DNS, connect, reset, timeout).
    #[error("analytics request failed: {message}")]
    Transport { message: String },

    /// The short code could not be read from the page context.
    #[error("short code unavailable: {message}")]
    ShortCode { message: String },
}

impl LoadError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn short_code(message: impl Into<String>) -> Self {
        Self::ShortCode {
            message: message.into(),
        }
    }

    /// Stable label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "fetch",
            Self::Decode(_) => "decode",
            Self::Transport { .. } => "transport",
            Self::ShortCode { .. } => "short_code",
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return Self::transport(format!("request timed out: {e}"));
        }
        if let Some(status) = e.status() {
            return Self::Fetch {
                status: status.as_u16(),
            };
        }
        Self::transport(e.to_string())
    }
}

/// Failure inside a chart rendering backend.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no drawing surface for target '{target}'")]
    UnknownTarget { target: String },

    #[error("failed to draw '{target}': {message}")]
    Draw { target: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Error returned by a dashboard refresh.
///
/// The dashboard has already reported it to its failure sink; callers decide
/// whether to surface it further.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl DashboardError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Load(e) => e.kind(),
            Self::Render(_) => "render",
        }
    }
}
