#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shortlink_dashboard::application::services::DashboardService;
use shortlink_dashboard::domain::entities::{AnalyticsPayload, ChartConfig, ChartData};
use shortlink_dashboard::domain::reporting::FailureSink;
use shortlink_dashboard::domain::repositories::{AnalyticsRepository, ShortCodeSource};
use shortlink_dashboard::domain::widgets::{ChartBackend, ChartHandle};
use shortlink_dashboard::error::{DashboardError, LoadError, RenderError};
use shortlink_dashboard::infrastructure::page::FixedShortCode;
use tokio::sync::{oneshot, watch};

pub type FetchResult = Result<AnalyticsPayload, LoadError>;

/// Analytics source whose responses are released by the test.
///
/// Each fetch takes the next scripted slot in call order and waits until the
/// test sends a result on that slot's sender. A slot whose sender is dropped
/// never resolves.
pub struct ScriptedRepository {
    slots: Mutex<VecDeque<oneshot::Receiver<FetchResult>>>,
    codes: Mutex<Vec<String>>,
    calls: watch::Sender<usize>,
}

impl ScriptedRepository {
    pub fn new() -> Arc<Self> {
        let (calls, _) = watch::channel(0);
        Arc::new(Self {
            slots: Mutex::new(VecDeque::new()),
            codes: Mutex::new(Vec::new()),
            calls,
        })
    }

    /// Queues a response the test releases later.
    pub fn script(&self) -> oneshot::Sender<FetchResult> {
        let (tx, rx) = oneshot::channel();
        self.slots.lock().unwrap().push_back(rx);
        tx
    }

    /// Queues a response that is available immediately.
    pub fn respond(&self, result: FetchResult) {
        let tx = self.script();
        let _ = tx.send(result);
    }

    pub fn codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }

    /// Waits until at least `n` fetches have started.
    pub async fn wait_for_calls(&self, n: usize) {
        let mut rx = self.calls.subscribe();
        rx.wait_for(|calls| *calls >= n).await.unwrap();
    }
}

#[async_trait]
impl AnalyticsRepository for ScriptedRepository {
    async fn fetch_analytics(&self, code: &str) -> FetchResult {
        let slot = self.slots.lock().unwrap().pop_front();
        self.codes.lock().unwrap().push(code.to_string());
        self.calls.send_modify(|n| *n += 1);

        match slot {
            Some(rx) => match rx.await {
                Ok(result) => result,
                Err(_) => std::future::pending().await,
            },
            None => panic!("unscripted fetch for '{code}'"),
        }
    }
}

/// Failure sink that keeps every report as `(message, kind)`.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<(String, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl FailureSink for RecordingSink {
    fn report(&self, message: &str, error: &DashboardError) {
        self.events
            .lock()
            .unwrap()
            .push((message.to_string(), error.kind().to_string()));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Created { target: String, data: ChartData },
    Updated { target: String, data: ChartData },
}

impl ChartEvent {
    pub fn target(&self) -> &str {
        match self {
            ChartEvent::Created { target, .. } | ChartEvent::Updated { target, .. } => target,
        }
    }
}

/// Chart backend that records every create and update.
#[derive(Default)]
pub struct RecordingBackend {
    events: Arc<Mutex<Vec<ChartEvent>>>,
    failing_target: Option<String>,
}

impl RecordingBackend {
    /// A backend that refuses to draw on `target`.
    pub fn failing_on(target: &str) -> Self {
        Self {
            failing_target: Some(target.to_string()),
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<ChartEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, ChartEvent::Created { .. }))
            .map(|e| e.target().to_string())
            .collect()
    }

    pub fn updated(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, ChartEvent::Updated { .. }))
            .map(|e| e.target().to_string())
            .collect()
    }
}

impl ChartBackend for RecordingBackend {
    fn create(
        &self,
        target: &str,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartHandle>, RenderError> {
        if self.failing_target.as_deref() == Some(target) {
            return Err(RenderError::UnknownTarget {
                target: target.to_string(),
            });
        }

        self.events.lock().unwrap().push(ChartEvent::Created {
            target: target.to_string(),
            data: config.data.clone(),
        });
        Ok(Box::new(RecordedChart {
            target: target.to_string(),
            events: Arc::clone(&self.events),
        }))
    }
}

struct RecordedChart {
    target: String,
    events: Arc<Mutex<Vec<ChartEvent>>>,
}

impl ChartHandle for RecordedChart {
    fn update(&mut self, data: &ChartData) -> Result<(), RenderError> {
        self.events.lock().unwrap().push(ChartEvent::Updated {
            target: self.target.clone(),
            data: data.clone(),
        });
        Ok(())
    }
}

/// Backend whose first `create` blocks its thread until the test releases it.
///
/// The refresh that triggers that first draw keeps the widget lock for as
/// long as the gate is closed.
pub struct GatedBackend {
    inner: RecordingBackend,
    gate: Mutex<Option<std::sync::mpsc::Receiver<()>>>,
    blocked: watch::Sender<bool>,
}

impl GatedBackend {
    pub fn new() -> (Arc<Self>, std::sync::mpsc::Sender<()>) {
        let (release, gate) = std::sync::mpsc::channel();
        let (blocked, _) = watch::channel(false);
        let backend = Arc::new(Self {
            inner: RecordingBackend::default(),
            gate: Mutex::new(Some(gate)),
            blocked,
        });
        (backend, release)
    }

    /// Waits until a `create` call is parked on the gate.
    pub async fn wait_until_blocked(&self) {
        let mut rx = self.blocked.subscribe();
        rx.wait_for(|blocked| *blocked).await.unwrap();
    }

    pub fn created(&self) -> Vec<String> {
        self.inner.created()
    }
}

impl ChartBackend for GatedBackend {
    fn create(
        &self,
        target: &str,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartHandle>, RenderError> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            self.blocked.send_replace(true);
            let _ = gate.recv();
        }
        self.inner.create(target, config)
    }
}

/// Decodes a payload from raw JSON, keeping object key order.
pub fn payload(json: &str) -> AnalyticsPayload {
    serde_json::from_str(json).unwrap()
}

pub fn payload_with_total(total_clicks: u64) -> AnalyticsPayload {
    payload(&format!(r#"{{"total_clicks": {total_clicks}}}"#))
}

pub fn full_payload() -> AnalyticsPayload {
    payload(
        r#"{
            "total_clicks": 42,
            "unique_visitors": 17,
            "avg_clicks_per_day": 3.5,
            "peak_hour": 13,
            "clicks_by_platform": { "windows": 20, "macos": 0, "linux": 12, "android": 0, "ios": 10, "other": 0 },
            "clicks_by_device": { "mobile": 10, "desktop": 32, "tablet": 0, "other": 0 },
            "clicks_by_browser": { "Firefox": 22, "Chrome": 0, "Safari": 20 },
            "clicks_by_day": [
                { "date": "2024-01-01", "clicks": 30 },
                { "date": "2024-01-02", "clicks": 12 }
            ],
            "clicks_by_source": {
                "direct": 30,
                "social_media": { "twitter": 8 },
                "search_engines": { "google": 4 },
                "other_referrers": []
            },
            "latest_clicks": [
                { "clicked_at": "2024-01-02T10:00:00Z", "os": "Linux", "browser_name": "Firefox", "browser_version": "121" }
            ]
        }"#,
    )
}

/// Dashboard wired to the given repository, backend and sink, reading `abc123`.
pub fn dashboard<R: AnalyticsRepository>(
    repository: Arc<R>,
    backend: Arc<dyn ChartBackend>,
    sink: Arc<RecordingSink>,
) -> DashboardService<R> {
    dashboard_with_code(repository, Arc::new(FixedShortCode::new("abc123")), backend, sink)
}

pub fn dashboard_with_code<R: AnalyticsRepository>(
    repository: Arc<R>,
    code_source: Arc<dyn ShortCodeSource>,
    backend: Arc<dyn ChartBackend>,
    sink: Arc<RecordingSink>,
) -> DashboardService<R> {
    DashboardService::new(repository, code_source, backend, sink)
}
