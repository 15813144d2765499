//! Chart data model handed to rendering backends.
//!
//! Field names serialize in the shape Chart.js expects, so a configuration
//! can be passed to `new Chart(ctx, config)` unchanged.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Line,
    Doughnut,
    Bar,
}

/// Complete description of one chart: type, data and display options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Labels plus one or more datasets. Replaced wholesale on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Values of the first dataset, empty when there is none.
    pub fn values(&self) -> &[u64] {
        self.datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub background_color: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    /// `Y` turns a bar chart horizontal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<IndexAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            index_axis: None,
            scales: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Axis>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
}

impl Axis {
    /// Count axis: starts at zero and only shows whole numbers.
    pub fn counts() -> Self {
        Self {
            begin_at_zero: true,
            ticks: Some(Ticks {
                step_size: 1,
                precision: 0,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub step_size: u32,
    pub precision: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_serializes_in_chartjs_shape() {
        let config = ChartConfig {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: vec!["Chrome".to_string()],
                datasets: vec![Dataset {
                    label: "Clicks by Browser".to_string(),
                    data: vec![3],
                    background_color: vec!["#fff".to_string()],
                    ..Dataset::default()
                }],
            },
            options: ChartOptions {
                index_axis: Some(IndexAxis::Y),
                scales: Some(Scales {
                    x: Some(Axis::counts()),
                    y: None,
                }),
                ..ChartOptions::default()
            },
        };

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "type": "bar",
                "data": {
                    "labels": ["Chrome"],
                    "datasets": [{
                        "label": "Clicks by Browser",
                        "data": [3],
                        "backgroundColor": ["#fff"]
                    }]
                },
                "options": {
                    "responsive": true,
                    "indexAxis": "y",
                    "scales": { "x": { "beginAtZero": true, "ticks": { "stepSize": 1, "precision": 0 } } }
                }
            })
        );
    }

    #[test]
    fn test_values_of_dataless_chart() {
        let data = ChartData::default();
        assert!(data.values().is_empty());
        assert!(data.is_empty());
    }
}
