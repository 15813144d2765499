//! Trait definitions for where the dashboard gets its inputs.
//!
//! These traits are implemented in the infrastructure layer:
//!
//! - [`AnalyticsRepository`] - fetches the analytics payload for a short code
//! - [`ShortCodeSource`] - reads the short code from the page context
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod analytics_repository;
pub mod short_code_source;

pub use analytics_repository::AnalyticsRepository;
pub use short_code_source::ShortCodeSource;

#[cfg(test)]
pub use analytics_repository::MockAnalyticsRepository;
#[cfg(test)]
pub use short_code_source::MockShortCodeSource;
