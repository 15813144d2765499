//! # Shortlink Dashboard
//!
//! Click-analytics dashboard for a URL shortener: fetches the aggregated
//! statistics of one short link and binds them to summary counters and
//! chart widgets.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Analytics entities, dashboard state and trait seams
//! - **Application Layer** ([`application`]) - Chart builders and the refresh orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client, short-code sources, renderers, logging
//!
//! ## Features
//!
//! - Wholesale state replacement on every successful fetch
//! - Chart widgets created once and updated in place
//! - Last-started-wins refreshes: a newer refresh cancels the one in flight
//! - Failures keep the last good state and are reported to a pluggable sink
//!
//! ## Quick Start
//!
//! ```bash
//! export ANALYTICS_BASE_URL="http://localhost:3000"
//!
//! # One-shot view
//! cargo run -- show abc123
//!
//! # Interactive: Enter refreshes, q quits
//! cargo run -- watch abc123
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::{DashboardError, LoadError, RenderError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DashboardService, RefreshOutcome};
    pub use crate::domain::entities::{AnalyticsPayload, ChartConfig, ChartData, DashboardState};
    pub use crate::domain::reporting::FailureSink;
    pub use crate::domain::repositories::{AnalyticsRepository, ShortCodeSource};
    pub use crate::domain::widgets::{ChartBackend, ChartHandle, ChartSlot};
    pub use crate::error::{DashboardError, LoadError, RenderError};
}
