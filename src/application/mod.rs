//! Application layer: the dashboard view-model and its chart builders.
//!
//! - [`services::dashboard_service::DashboardService`] - fetch, project, draw
//! - [`charts`] - pure builders from breakdowns to chart configurations

pub mod charts;
pub mod services;
