//! Chart widgets and the rendering backend they draw through.
//!
//! A widget is bound to one fixed drawing target. It is created once, the
//! first time data for it arrives, and afterwards only its data is replaced.
//! The backend is the only thing that knows how pixels (or characters, or
//! files) are produced.

use crate::domain::entities::{ChartConfig, ChartData};
use crate::error::RenderError;

/// The four charts a dashboard shows, each with its fixed drawing target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Platform,
    TimeSeries,
    Device,
    Browser,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 4] = [
        ChartSlot::Platform,
        ChartSlot::TimeSeries,
        ChartSlot::Device,
        ChartSlot::Browser,
    ];

    /// Identifier of the drawing surface this chart is bound to.
    pub fn target(self) -> &'static str {
        match self {
            ChartSlot::Platform => "chart-click-by-platform",
            ChartSlot::TimeSeries => "chart-click-by-day",
            ChartSlot::Device => "chart-click-by-device",
            ChartSlot::Browser => "chart-click-by-browser",
        }
    }
}

/// Creates chart instances on named drawing surfaces.
///
/// # Implementations
///
/// - [`crate::infrastructure::render::TerminalBackend`] - draws bars in a terminal
/// - [`crate::infrastructure::render::ChartJsFileBackend`] - writes Chart.js configs to disk
#[cfg_attr(test, mockall::automock)]
pub trait ChartBackend: Send + Sync {
    /// Draws a new chart on `target` and returns a handle for later updates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the target cannot be drawn on.
    fn create(
        &self,
        target: &str,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartHandle>, RenderError>;
}

/// A live chart instance owned by a [`ChartWidget`].
#[cfg_attr(test, mockall::automock)]
pub trait ChartHandle: Send {
    /// Replaces the chart's data and redraws it in place.
    fn update(&mut self, data: &ChartData) -> Result<(), RenderError>;
}

/// A chart bound to its slot's target.
pub struct ChartWidget {
    slot: ChartSlot,
    handle: Box<dyn ChartHandle>,
    revision: u64,
}

impl ChartWidget {
    /// Creates the chart on the slot's target through `backend`.
    pub fn create(
        backend: &dyn ChartBackend,
        slot: ChartSlot,
        config: &ChartConfig,
    ) -> Result<Self, RenderError> {
        let handle = backend.create(slot.target(), config)?;
        Ok(Self {
            slot,
            handle,
            revision: 0,
        })
    }

    /// Swaps in new data without recreating the chart.
    pub fn update(&mut self, data: &ChartData) -> Result<(), RenderError> {
        self.handle.update(data)?;
        self.revision += 1;
        Ok(())
    }

    pub fn slot(&self) -> ChartSlot {
        self.slot
    }

    /// Number of in-place updates since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl std::fmt::Debug for ChartWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartWidget")
            .field("slot", &self.slot)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
