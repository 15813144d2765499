//! Sink for dashboard failures.

use crate::error::DashboardError;

/// Receives one event per failed dashboard refresh.
///
/// Reporting is fire-and-forget: implementations must not block and must
/// not fail.
///
/// # Implementations
///
/// - [`crate::infrastructure::telemetry::TracingFailureSink`] - logs through `tracing`
#[cfg_attr(test, mockall::automock)]
pub trait FailureSink: Send + Sync {
    /// Records a human-readable `message` together with the underlying error.
    fn report(&self, message: &str, error: &DashboardError);
}
