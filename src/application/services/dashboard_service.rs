//! Dashboard view-model: binds fetched analytics to state and chart widgets.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock, watch};
use tracing::{debug, info};

use crate::application::charts::{
    build_browser_chart, build_device_chart, build_platform_chart, build_time_series_chart,
};
use crate::domain::entities::{AnalyticsPayload, ChartConfig, DashboardState};
use crate::domain::reporting::FailureSink;
use crate::domain::repositories::{AnalyticsRepository, ShortCodeSource};
use crate::domain::widgets::{ChartBackend, ChartSlot, ChartWidget};
use crate::error::{DashboardError, LoadError, RenderError};

/// Default upper bound for a single analytics fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// What a refresh did to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// State and charts now reflect this refresh's payload.
    Applied,
    /// A newer refresh started first; this one was dropped without changes.
    Superseded,
}

/// Owns one dashboard's state and its chart widgets.
///
/// # Refresh semantics
///
/// - The short code is read from the [`ShortCodeSource`] on every refresh.
/// - On success the [`DashboardState`] is replaced wholesale, then each chart
///   widget is created (first time) or updated in place.
/// - On failure the state is left as it was, the failure is reported once to
///   the [`FailureSink`], and the error is returned.
/// - Overlapping refreshes are last-started-wins: starting a refresh cancels
///   any fetch still in flight from an earlier one.
pub struct DashboardService<R: AnalyticsRepository> {
    repository: Arc<R>,
    code_source: Arc<dyn ShortCodeSource>,
    sink: Arc<dyn FailureSink>,
    fetch_timeout: Duration,
    state: RwLock<DashboardState>,
    widgets: Mutex<WidgetSet>,
    generation: watch::Sender<u64>,
}

impl<R: AnalyticsRepository> DashboardService<R> {
    /// Creates a dashboard with empty state and no widgets yet.
    pub fn new(
        repository: Arc<R>,
        code_source: Arc<dyn ShortCodeSource>,
        backend: Arc<dyn ChartBackend>,
        sink: Arc<dyn FailureSink>,
    ) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            repository,
            code_source,
            sink,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            state: RwLock::new(DashboardState::default()),
            widgets: Mutex::new(WidgetSet::new(backend)),
            generation,
        }
    }

    /// Sets the per-fetch timeout. Expiry counts as a transport failure.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// First load when the dashboard is opened.
    pub async fn init(&self) -> Result<RefreshOutcome, DashboardError> {
        self.refresh().await
    }

    /// Fetches fresh analytics and applies them.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Load`] if the payload could not be obtained
    /// (state untouched), or [`DashboardError::Render`] if a chart could not
    /// be drawn (state already updated). Either way the error has already
    /// been reported to the failure sink.
    pub async fn refresh(&self) -> Result<RefreshOutcome, DashboardError> {
        let ticket = self.begin_generation();
        let cancelled = superseded(self.generation.subscribe(), ticket);

        let result = tokio::select! {
            biased;
            _ = cancelled => {
                debug!(generation = ticket, "refresh superseded while fetching");
                return Ok(RefreshOutcome::Superseded);
            }
            result = self.load() => result,
        };

        // A newer refresh may start while this one waits for the widgets;
        // the ticket is only trusted once the lock is held.
        let mut widgets = self.widgets.lock().await;
        if !self.is_current(ticket) {
            debug!(generation = ticket, "discarding result of superseded refresh");
            return Ok(RefreshOutcome::Superseded);
        }

        let payload = match result {
            Ok(payload) => payload,
            Err(e) => return Err(self.fail("Error fetching analytics data", e.into())),
        };

        let state = DashboardState::from(payload);
        *self.state.write().await = state.clone();
        info!(
            generation = ticket,
            total_clicks = state.total_clicks,
            unique_visitors = state.unique_visitors,
            "dashboard state updated"
        );

        widgets
            .apply(&state)
            .map_err(|e| self.fail("Error rendering analytics charts", e.into()))?;

        Ok(RefreshOutcome::Applied)
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    /// Slots whose widget has been created, in display order.
    pub async fn rendered_slots(&self) -> Vec<ChartSlot> {
        let widgets = self.widgets.lock().await;
        ChartSlot::ALL
            .into_iter()
            .filter(|slot| widgets.get(*slot).is_some())
            .collect()
    }

    /// In-place update count of a slot's widget, `None` if it was never created.
    pub async fn widget_revision(&self, slot: ChartSlot) -> Option<u64> {
        self.widgets.lock().await.get(slot).map(ChartWidget::revision)
    }

    fn begin_generation(&self) -> u64 {
        let mut ticket = 0;
        self.generation.send_modify(|g| {
            *g += 1;
            ticket = *g;
        });
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        *self.generation.borrow() == ticket
    }

    async fn load(&self) -> Result<AnalyticsPayload, LoadError> {
        let code = self.code_source.read_code()?;
        debug!(code = %code, "fetching analytics");

        match tokio::time::timeout(self.fetch_timeout, self.repository.fetch_analytics(&code)).await
        {
            Ok(result) => result,
            Err(_) => Err(LoadError::transport(format!(
                "request timed out after {}ms",
                self.fetch_timeout.as_millis()
            ))),
        }
    }

    fn fail(&self, message: &str, error: DashboardError) -> DashboardError {
        self.sink.report(message, &error);
        error
    }
}

/// Resolves once the generation counter has moved past `ticket`.
async fn superseded(mut rx: watch::Receiver<u64>, ticket: u64) {
    loop {
        if *rx.borrow_and_update() != ticket {
            return;
        }
        if rx.changed().await.is_err() {
            // Sender gone: nothing can supersede this refresh any more.
            std::future::pending::<()>().await;
        }
    }
}

/// The dashboard's chart widgets, each created on first data.
struct WidgetSet {
    backend: Arc<dyn ChartBackend>,
    platform: Option<ChartWidget>,
    time_series: Option<ChartWidget>,
    device: Option<ChartWidget>,
    browser: Option<ChartWidget>,
}

impl WidgetSet {
    fn new(backend: Arc<dyn ChartBackend>) -> Self {
        Self {
            backend,
            platform: None,
            time_series: None,
            device: None,
            browser: None,
        }
    }

    fn get(&self, slot: ChartSlot) -> Option<&ChartWidget> {
        match slot {
            ChartSlot::Platform => self.platform.as_ref(),
            ChartSlot::TimeSeries => self.time_series.as_ref(),
            ChartSlot::Device => self.device.as_ref(),
            ChartSlot::Browser => self.browser.as_ref(),
        }
    }

    /// Draws every chart for `state`, then returns the first failure (if any).
    ///
    /// The browser chart is skipped while there are no browsers; an existing
    /// browser widget keeps its last data.
    fn apply(&mut self, state: &DashboardState) -> Result<(), RenderError> {
        let backend = Arc::clone(&self.backend);
        let mut results = vec![
            upsert(
                backend.as_ref(),
                &mut self.platform,
                ChartSlot::Platform,
                build_platform_chart(&state.clicks_by_platform),
            ),
            upsert(
                backend.as_ref(),
                &mut self.time_series,
                ChartSlot::TimeSeries,
                build_time_series_chart(&state.clicks_by_day),
            ),
            upsert(
                backend.as_ref(),
                &mut self.device,
                ChartSlot::Device,
                build_device_chart(&state.clicks_by_device),
            ),
        ];

        if !state.clicks_by_browser.is_empty() {
            results.push(upsert(
                backend.as_ref(),
                &mut self.browser,
                ChartSlot::Browser,
                build_browser_chart(&state.clicks_by_browser),
            ));
        }

        results.into_iter().collect()
    }
}

fn upsert(
    backend: &dyn ChartBackend,
    widget: &mut Option<ChartWidget>,
    slot: ChartSlot,
    config: ChartConfig,
) -> Result<(), RenderError> {
    match widget {
        Some(existing) => existing.update(&config.data),
        None => {
            *widget = Some(ChartWidget::create(backend, slot, &config)?);
            debug!(chart = slot.target(), "chart widget created");
            Ok(())
        }
    }
}
