//! Chart builders: turn dashboard breakdowns into chart configurations.
//!
//! | Builder | Chart | Zero buckets |
//! |---|---|---|
//! | [`build_platform_chart`] | pie | dropped |
//! | [`build_device_chart`] | doughnut | dropped |
//! | [`build_time_series_chart`] | line | kept |
//! | [`build_browser_chart`] | horizontal bar | kept |
//!
//! Colours are assigned by position from [`PALETTE`]. When buckets are
//! dropped the remaining ones shift left, so a category's colour can change
//! between payloads.

use crate::domain::entities::{
    Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, DayClicks, DeviceBreakdown,
    IndexAxis, PlatformBreakdown, Scales,
};

/// Segment colours, applied in order.
pub const PALETTE: [&str; 6] = [
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 99, 132, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(153, 102, 255, 0.6)",
    "rgba(255, 159, 64, 0.6)",
];

const LINE_COLOR: &str = "rgba(54, 162, 235, 1)";
const BAR_COLOR: &str = "rgba(75, 192, 192, 0.6)";

/// Pie chart of clicks per operating system, non-zero buckets only.
pub fn build_platform_chart(platform: &PlatformBreakdown) -> ChartConfig {
    let buckets = platform.buckets().map(|(p, n)| (p.label(), n));
    segmented(ChartKind::Pie, "Clicks by Platform", buckets)
}

/// Doughnut chart of clicks per device type, non-zero buckets only.
pub fn build_device_chart(device: &DeviceBreakdown) -> ChartConfig {
    let buckets = device.buckets().map(|(d, n)| (d.label(), n));
    segmented(ChartKind::Doughnut, "Clicks by Device", buckets)
}

/// Line chart with one point per day, in the order given.
///
/// Days are neither sorted, de-duplicated nor gap-filled.
pub fn build_time_series_chart(days: &[DayClicks]) -> ChartConfig {
    let data = ChartData {
        labels: days.iter().map(|d| d.date.clone()).collect(),
        datasets: vec![Dataset {
            label: "Clicks per Day".to_string(),
            data: days.iter().map(|d| d.clicks).collect(),
            border_color: Some(LINE_COLOR.to_string()),
            fill: Some(false),
            tension: Some(0.1),
            ..Dataset::default()
        }],
    };

    ChartConfig {
        kind: ChartKind::Line,
        data,
        options: ChartOptions {
            scales: Some(Scales {
                x: None,
                y: Some(Axis::counts()),
            }),
            ..ChartOptions::default()
        },
    }
}

/// Horizontal bar chart of clicks per browser.
///
/// Entries keep their payload order and zero counts are shown. Callers skip
/// this chart entirely when there are no browsers.
pub fn build_browser_chart(browsers: &[(String, u64)]) -> ChartConfig {
    let data = ChartData {
        labels: browsers.iter().map(|(name, _)| name.clone()).collect(),
        datasets: vec![Dataset {
            label: "Clicks by Browser".to_string(),
            data: browsers.iter().map(|(_, n)| *n).collect(),
            background_color: vec![BAR_COLOR.to_string()],
            ..Dataset::default()
        }],
    };

    ChartConfig {
        kind: ChartKind::Bar,
        data,
        options: ChartOptions {
            index_axis: Some(IndexAxis::Y),
            scales: Some(Scales {
                x: Some(Axis::counts()),
                y: None,
            }),
            ..ChartOptions::default()
        },
    }
}

fn segmented<'a>(
    kind: ChartKind,
    title: &str,
    buckets: impl Iterator<Item = (&'a str, u64)>,
) -> ChartConfig {
    let (labels, values): (Vec<String>, Vec<u64>) = buckets
        .filter(|(_, n)| *n > 0)
        .map(|(label, n)| (label.to_string(), n))
        .unzip();

    let background_color = PALETTE
        .iter()
        .take(labels.len())
        .map(|c| c.to_string())
        .collect();

    ChartConfig {
        kind,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: title.to_string(),
                data: values,
                background_color,
                ..Dataset::default()
            }],
        },
        options: ChartOptions::default(),
    }
}
