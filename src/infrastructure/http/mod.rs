//! HTTP access to the analytics service.

mod analytics_client;

pub use analytics_client::HttpAnalyticsRepository;
