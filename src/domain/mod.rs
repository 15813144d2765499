//! Domain layer: analytics data, dashboard state and the seams around them.
//!
//! The domain layer has no knowledge of HTTP, terminals or log formats.
//!
//! # Architecture
//!
//! - [`entities`] - Analytics payload, dashboard state and chart models
//! - [`repositories`] - Input traits (analytics source, short code source)
//! - [`widgets`] - Chart widgets and the rendering backend trait
//! - [`reporting`] - Failure sink trait
//!
//! # Refresh Flow
//!
//! 1. The short code is read from a [`repositories::ShortCodeSource`]
//! 2. The payload is fetched through an [`repositories::AnalyticsRepository`]
//! 3. The payload is projected into an [`entities::DashboardState`]
//! 4. Chart configurations are built and drawn through [`widgets::ChartWidget`]s
//!
//! The orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod reporting;
pub mod repositories;
pub mod widgets;
