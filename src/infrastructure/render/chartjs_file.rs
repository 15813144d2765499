//! Chart backend writing Chart.js configurations to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{ChartConfig, ChartData};
use crate::domain::widgets::{ChartBackend, ChartHandle};
use crate::error::RenderError;

/// Writes `{dir}/{target}.json` for every chart, ready to be passed to
/// `new Chart(ctx, config)` by a page that owns the canvases.
///
/// Updates rewrite the same file with the new data and unchanged options.
#[derive(Debug, Clone)]
pub struct ChartJsFileBackend {
    dir: PathBuf,
}

impl ChartJsFileBackend {
    /// Creates the output directory (and parents) if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, RenderError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, target: &str) -> PathBuf {
        self.dir.join(format!("{target}.json"))
    }
}

impl ChartBackend for ChartJsFileBackend {
    fn create(
        &self,
        target: &str,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartHandle>, RenderError> {
        if target.is_empty() || target.contains(['/', '\\']) || target.starts_with('.') {
            return Err(RenderError::UnknownTarget {
                target: target.to_string(),
            });
        }

        let chart = FileChart {
            target: target.to_string(),
            path: self.path_for(target),
            config: config.clone(),
        };
        chart.write()?;
        Ok(Box::new(chart))
    }
}

struct FileChart {
    target: String,
    path: PathBuf,
    config: ChartConfig,
}

impl FileChart {
    fn write(&self) -> Result<(), RenderError> {
        let json = serde_json::to_vec_pretty(&self.config).map_err(|e| RenderError::Draw {
            target: self.target.clone(),
            message: e.to_string(),
        })?;
        write_atomically(&self.path, &json)?;
        debug!(chart = %self.target, path = %self.path.display(), "chart config written");
        Ok(())
    }
}

impl ChartHandle for FileChart {
    fn update(&mut self, data: &ChartData) -> Result<(), RenderError> {
        self.config.data = data.clone();
        self.write()
    }
}

/// A page polling the file never observes a half-written config.
fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::charts::{build_platform_chart, build_time_series_chart};
    use crate::domain::entities::{DayClicks, PlatformBreakdown};
    use serde_json::Value;

    fn read(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn test_create_writes_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let backend = ChartJsFileBackend::new(dir.path().join("charts")).unwrap();
        let config = build_platform_chart(&PlatformBreakdown {
            macos: 2,
            ..PlatformBreakdown::default()
        });

        backend.create("chart-click-by-platform", &config).unwrap();

        let written = read(&backend.path_for("chart-click-by-platform"));
        assert_eq!(written["type"], "pie");
        assert_eq!(written["data"]["labels"][0], "macOS");
        assert_eq!(written["data"]["datasets"][0]["data"][0], 2);
    }

    #[test]
    fn test_update_replaces_data_and_keeps_options() {
        let dir = tempfile::tempdir().unwrap();
        let backend = ChartJsFileBackend::new(dir.path()).unwrap();
        let mut handle = backend
            .create("chart-click-by-day", &build_time_series_chart(&[]))
            .unwrap();

        let next = build_time_series_chart(&[DayClicks {
            date: "2024-05-01".to_string(),
            clicks: 6,
        }]);
        handle.update(&next.data).unwrap();

        let written = read(&backend.path_for("chart-click-by-day"));
        assert_eq!(written["data"]["labels"][0], "2024-05-01");
        assert_eq!(written["options"]["scales"]["y"]["beginAtZero"], true);
        assert!(!dir.path().join("chart-click-by-day.json.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_targets() {
        let dir = tempfile::tempdir().unwrap();
        let backend = ChartJsFileBackend::new(dir.path()).unwrap();

        let result = backend.create("../escape", &build_time_series_chart(&[]));

        assert!(matches!(result, Err(RenderError::UnknownTarget { .. })));
    }
}
