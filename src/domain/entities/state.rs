//! UI-bound projection of the most recent analytics payload.

use serde::Serialize;
use serde_json::Value;
use serde_with::{Map, serde_as};

use super::payload::{
    AnalyticsPayload, DayClicks, DeviceBreakdown, LatestClick, PlatformBreakdown,
    SourceBreakdown,
};
use crate::utils::peak_hour::format_peak_hour;

/// Everything the dashboard displays besides the charts themselves.
///
/// Every field has a concrete value: absent payload fields become zero or
/// empty. `peak_hour` is the one exception, because hour `0` is a real value
/// and must not be confused with "no data".
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardState {
    pub total_clicks: u64,
    pub unique_visitors: u64,
    pub avg_clicks_per_day: f64,
    pub peak_hour: Option<u8>,
    pub clicks_by_platform: PlatformBreakdown,
    pub clicks_by_device: DeviceBreakdown,
    #[serde_as(as = "Map<_, _>")]
    pub clicks_by_browser: Vec<(String, u64)>,
    pub clicks_by_day: Vec<DayClicks>,
    pub clicks_by_source: SourceBreakdown,
    pub latest_clicks: Vec<Value>,
}

impl DashboardState {
    /// Formatted peak hour, `"N/A"` when unknown.
    pub fn peak_hour_label(&self) -> String {
        format_peak_hour(self.peak_hour)
    }

    pub fn latest_click_summaries(&self) -> Vec<LatestClick> {
        self.latest_clicks.iter().map(LatestClick::from_value).collect()
    }
}

impl From<AnalyticsPayload> for DashboardState {
    fn from(payload: AnalyticsPayload) -> Self {
        Self {
            total_clicks: payload.total_clicks.unwrap_or_default(),
            unique_visitors: payload.unique_visitors.unwrap_or_default(),
            avg_clicks_per_day: payload
                .avg_clicks_per_day
                .filter(|avg| avg.is_finite() && *avg > 0.0)
                .unwrap_or_default(),
            peak_hour: payload
                .peak_hour
                .and_then(|hour| u8::try_from(hour).ok())
                .filter(|hour| *hour < 24),
            clicks_by_platform: payload.clicks_by_platform.unwrap_or_default(),
            clicks_by_device: payload.clicks_by_device.unwrap_or_default(),
            clicks_by_browser: payload.clicks_by_browser.unwrap_or_default(),
            clicks_by_day: payload.clicks_by_day.unwrap_or_default(),
            clicks_by_source: payload.clicks_by_source.unwrap_or_default(),
            latest_clicks: payload.latest_clicks.unwrap_or_default(),
        }
    }
}
