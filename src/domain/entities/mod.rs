//! Domain entities representing analytics data and its dashboard projection.
//!
//! - [`payload`] - Analytics document received from the analytics service
//! - [`state`] - UI-bound dashboard state derived from a payload
//! - [`chart`] - Chart configuration handed to rendering backends

pub mod chart;
pub mod payload;
pub mod state;

pub use chart::{
    Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, IndexAxis, Scales, Ticks,
};
pub use payload::{
    AnalyticsPayload, DayClicks, Device, DeviceBreakdown, LatestClick, Platform,
    PlatformBreakdown, SourceBreakdown,
};
pub use state::DashboardState;
