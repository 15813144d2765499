//! Terminal chart backend using `colored` bars.

use std::io::Write;
use std::sync::{Arc, Mutex};

use colored::{Color, Colorize};

use crate::domain::entities::{ChartConfig, ChartData, ChartKind};
use crate::domain::widgets::{ChartBackend, ChartHandle};
use crate::error::RenderError;

const BAR_WIDTH: u64 = 32;
const SEGMENT_COLORS: [Color; 6] = [
    Color::Blue,
    Color::Red,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
    Color::BrightRed,
];

/// Draws each chart as a block of horizontal bars.
///
/// ```text
/// ■ Clicks by Platform  [chart-click-by-platform]
///   Windows     ████████████████████████████████ 4
///   Linux       ████████████████ 2
/// ```
pub struct TerminalBackend<W: Write + Send + 'static> {
    out: Arc<Mutex<W>>,
}

impl<W: Write + Send + 'static> TerminalBackend<W> {
    /// Draws into a shared writer; keep a clone of `out` to inspect output.
    pub fn new(out: Arc<Mutex<W>>) -> Self {
        Self { out }
    }
}

impl<W: Write + Send + 'static> ChartBackend for TerminalBackend<W> {
    fn create(
        &self,
        target: &str,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartHandle>, RenderError> {
        let chart = TerminalChart {
            target: target.to_string(),
            kind: config.kind,
            out: Arc::clone(&self.out),
        };
        chart.draw(&config.data)?;
        Ok(Box::new(chart))
    }
}

struct TerminalChart<W: Write + Send> {
    target: String,
    kind: ChartKind,
    out: Arc<Mutex<W>>,
}

impl<W: Write + Send> TerminalChart<W> {
    fn draw(&self, data: &ChartData) -> Result<(), RenderError> {
        let mut out = self.out.lock().map_err(|_| RenderError::Draw {
            target: self.target.clone(),
            message: "output writer lock poisoned".to_string(),
        })?;

        let title = data
            .datasets
            .first()
            .map(|d| d.label.as_str())
            .unwrap_or(self.target.as_str());
        writeln!(
            out,
            "{} {}  {}",
            "■".bright_blue(),
            title.bold(),
            format!("[{}]", self.target).bright_black()
        )?;

        if data.is_empty() {
            writeln!(out, "  {}", "(no data)".bright_black())?;
            writeln!(out)?;
            return Ok(());
        }

        let values = data.values();
        let max = values.iter().copied().max().unwrap_or(0).max(1);
        let label_width = data.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        for (i, label) in data.labels.iter().enumerate() {
            let value = values.get(i).copied().unwrap_or(0);
            let len = bar_len(value, max);
            let bar = "█".repeat(len).color(self.color_for(i));
            writeln!(out, "  {label:<label_width$} {bar} {value}")?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    fn color_for(&self, index: usize) -> Color {
        match self.kind {
            ChartKind::Pie | ChartKind::Doughnut => SEGMENT_COLORS[index % SEGMENT_COLORS.len()],
            ChartKind::Line => Color::Cyan,
            ChartKind::Bar => Color::Green,
        }
    }
}

/// Bar length in cells, scaled so `max` fills `BAR_WIDTH`.
fn bar_len(value: u64, max: u64) -> usize {
    let scaled = (u128::from(value) * u128::from(BAR_WIDTH)).div_ceil(u128::from(max.max(1)));
    scaled.min(u128::from(BAR_WIDTH)) as usize
}

impl<W: Write + Send> ChartHandle for TerminalChart<W> {
    fn update(&mut self, data: &ChartData) -> Result<(), RenderError> {
        self.draw(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::charts::{build_browser_chart, build_device_chart};
    use crate::domain::entities::DeviceBreakdown;

    fn output(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_create_draws_labels_and_values() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let backend = TerminalBackend::new(Arc::clone(&buffer));
        let config = build_browser_chart(&[("Chrome".to_string(), 0), ("Firefox".to_string(), 5)]);

        backend.create("chart-click-by-browser", &config).unwrap();

        let text = output(&buffer);
        assert!(text.contains("Clicks by Browser"));
        assert!(text.contains("chart-click-by-browser"));
        assert!(text.contains("Chrome"));
        assert!(text.contains("Firefox"));
        assert!(text.contains(" 5"));
    }

    #[test]
    fn test_huge_counts_draw_full_width_bars() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let backend = TerminalBackend::new(Arc::clone(&buffer));
        let config = build_browser_chart(&[
            ("Chrome".to_string(), u64::MAX / 2),
            ("Edge".to_string(), u64::MAX),
        ]);

        backend.create("chart-click-by-browser", &config).unwrap();

        let text = output(&buffer);
        assert!(text.contains(&u64::MAX.to_string()));
        assert_eq!(bar_len(u64::MAX, u64::MAX), BAR_WIDTH as usize);
        assert_eq!(bar_len(u64::MAX / 2, u64::MAX), BAR_WIDTH as usize / 2);
    }

    #[test]
    fn test_bar_len_rounds_up_small_values() {
        assert_eq!(bar_len(0, 10), 0);
        assert_eq!(bar_len(1, 1000), 1);
        assert_eq!(bar_len(10, 10), BAR_WIDTH as usize);
    }

    #[test]
    fn test_empty_chart_draws_placeholder() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let backend = TerminalBackend::new(Arc::clone(&buffer));

        backend
            .create("chart-click-by-device", &build_device_chart(&DeviceBreakdown::default()))
            .unwrap();

        assert!(output(&buffer).contains("(no data)"));
    }

    #[test]
    fn test_update_redraws() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let backend = TerminalBackend::new(Arc::clone(&buffer));
        let mut handle = backend
            .create("chart-click-by-device", &build_device_chart(&DeviceBreakdown::default()))
            .unwrap();

        let updated = build_device_chart(&DeviceBreakdown {
            tablet: 3,
            ..DeviceBreakdown::default()
        });
        handle.update(&updated.data).unwrap();

        let text = output(&buffer);
        assert_eq!(text.matches("Clicks by Device").count(), 2);
        assert!(text.contains("Tablet"));
    }
}
