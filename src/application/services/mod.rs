//! Services orchestrating the dashboard refresh flow.

pub mod dashboard_service;

pub use dashboard_service::{DEFAULT_FETCH_TIMEOUT, DashboardService, RefreshOutcome};
