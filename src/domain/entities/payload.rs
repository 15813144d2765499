//! Analytics payload as delivered by the analytics service.
//!
//! The service may omit any field or send `null` in its place. Top-level
//! fields are kept as `Option` so absence stays observable; nested buckets
//! collapse `null` to zero on decode.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, Map, serde_as};

/// One analytics document for a single short code.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsPayload {
    pub total_clicks: Option<u64>,
    pub unique_visitors: Option<u64>,
    pub avg_clicks_per_day: Option<f64>,
    /// Hour of day with the most clicks; anything outside 0-23 is discarded
    /// when projected into the dashboard state.
    pub peak_hour: Option<i64>,
    pub clicks_by_platform: Option<PlatformBreakdown>,
    pub clicks_by_device: Option<DeviceBreakdown>,
    /// Browser name to count, in the order the service emitted them.
    #[serde_as(as = "Option<Map<_, DefaultOnNull>>")]
    pub clicks_by_browser: Option<Vec<(String, u64)>>,
    pub clicks_by_day: Option<Vec<DayClicks>>,
    pub clicks_by_source: Option<SourceBreakdown>,
    /// Most recent first. The shape of each entry belongs to the service.
    pub latest_clicks: Option<Vec<Value>>,
}

/// Operating system buckets.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformBreakdown {
    #[serde_as(as = "DefaultOnNull")]
    pub windows: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub macos: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub linux: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub android: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub ios: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub other: u64,
}

/// Platform categories in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Android,
    Ios,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Windows,
        Platform::MacOs,
        Platform::Linux,
        Platform::Android,
        Platform::Ios,
        Platform::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Other => "Other",
        }
    }
}

impl PlatformBreakdown {
    pub fn count(&self, platform: Platform) -> u64 {
        match platform {
            Platform::Windows => self.windows,
            Platform::MacOs => self.macos,
            Platform::Linux => self.linux,
            Platform::Android => self.android,
            Platform::Ios => self.ios,
            Platform::Other => self.other,
        }
    }

    /// Every bucket, zero or not, in [`Platform::ALL`] order.
    pub fn buckets(&self) -> impl Iterator<Item = (Platform, u64)> + '_ {
        Platform::ALL.into_iter().map(|p| (p, self.count(p)))
    }
}

/// Device form-factor buckets.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceBreakdown {
    #[serde_as(as = "DefaultOnNull")]
    pub mobile: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub desktop: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub tablet: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub other: u64,
}

/// Device categories in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Mobile,
    Desktop,
    Tablet,
    Other,
}

impl Device {
    pub const ALL: [Device; 4] = [Device::Mobile, Device::Desktop, Device::Tablet, Device::Other];

    pub fn label(self) -> &'static str {
        match self {
            Device::Mobile => "Mobile",
            Device::Desktop => "Desktop",
            Device::Tablet => "Tablet",
            Device::Other => "Other",
        }
    }
}

impl DeviceBreakdown {
    pub fn count(&self, device: Device) -> u64 {
        match device {
            Device::Mobile => self.mobile,
            Device::Desktop => self.desktop,
            Device::Tablet => self.tablet,
            Device::Other => self.other,
        }
    }

    pub fn buckets(&self) -> impl Iterator<Item = (Device, u64)> + '_ {
        Device::ALL.into_iter().map(|d| (d, self.count(d)))
    }
}

/// Clicks recorded on one calendar day.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayClicks {
    #[serde_as(as = "DefaultOnNull")]
    pub date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub clicks: u64,
}

/// Where clicks came from.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceBreakdown {
    #[serde_as(as = "DefaultOnNull")]
    pub direct: u64,
    #[serde_as(as = "DefaultOnNull<Map<_, DefaultOnNull>>")]
    pub social_media: Vec<(String, u64)>,
    #[serde_as(as = "DefaultOnNull<Map<_, DefaultOnNull>>")]
    pub search_engines: Vec<(String, u64)>,
    #[serde_as(as = "DefaultOnNull")]
    pub other_referrers: Vec<String>,
}

impl SourceBreakdown {
    pub fn social_total(&self) -> u64 {
        self.social_media.iter().map(|(_, n)| n).sum()
    }

    pub fn search_total(&self) -> u64 {
        self.search_engines.iter().map(|(_, n)| n).sum()
    }
}

/// Display view over one opaque `latest_clicks` entry.
///
/// Missing or non-string fields fall back to the same placeholders the
/// analytics service uses for incomplete fingerprints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestClick {
    pub clicked_at: String,
    pub ip_address: String,
    pub device_type: String,
    pub os: String,
    pub browser: String,
    pub referrer: String,
}

impl LatestClick {
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str, fallback: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        let browser_name = field("browser_name", "Unknown");
        let browser = match value.get("browser_version").and_then(Value::as_str) {
            Some(version) if !version.is_empty() => format!("{browser_name} {version}"),
            _ => browser_name,
        };

        Self {
            clicked_at: field("clicked_at", "Unknown"),
            ip_address: field("ip_address", "Unknown"),
            device_type: field("device_type", "Unknown"),
            os: field("os", "Unknown"),
            browser,
            referrer: field("referrer", "Direct"),
        }
    }
}
