//! Failure sink that writes to the `tracing` error channel.

use tracing::error;

use crate::domain::reporting::FailureSink;
use crate::error::DashboardError;

/// Logs every dashboard failure at `ERROR` level with its kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFailureSink;

impl FailureSink for TracingFailureSink {
    fn report(&self, message: &str, error: &DashboardError) {
        error!(kind = error.kind(), error = %error, "{message}");
    }
}
