//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Analytics service client (`reqwest`)
//! - [`page`] - Short-code sources
//! - [`render`] - Chart rendering backends (terminal, Chart.js files)
//! - [`telemetry`] - Tracing subscriber setup and failure sink

pub mod http;
pub mod page;
pub mod render;
pub mod telemetry;
