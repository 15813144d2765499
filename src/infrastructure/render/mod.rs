//! Chart rendering backends.
//!
//! Provides two [`crate::domain::widgets::ChartBackend`] implementations:
//! - [`TerminalBackend`] - colored bar charts on a terminal
//! - [`ChartJsFileBackend`] - Chart.js configuration files for a web page

mod chartjs_file;
mod terminal;

pub use chartjs_file::ChartJsFileBackend;
pub use terminal::TerminalBackend;
