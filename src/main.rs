//! Command-line dashboard for one short link's click analytics.
//!
//! # Usage
//!
//! ```bash
//! # Load once and print counters, sources, latest clicks and charts
//! cargo run -- show abc123
//!
//! # Re-read the code from a file on every refresh
//! cargo run -- show --code-file ./current-code.txt
//!
//! # Write Chart.js configs instead of drawing in the terminal
//! cargo run -- show abc123 --out ./charts
//!
//! # Interactive: Enter refreshes, q quits
//! cargo run -- watch abc123
//! ```
//!
//! # Environment Variables
//!
//! See [`shortlink_dashboard::config`]. A `.env` file is loaded if present.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use tokio::sync::mpsc;

use shortlink_dashboard::application::services::{DashboardService, RefreshOutcome};
use shortlink_dashboard::config::{self, Config};
use shortlink_dashboard::domain::entities::{DashboardState, SourceBreakdown};
use shortlink_dashboard::domain::repositories::ShortCodeSource;
use shortlink_dashboard::domain::widgets::ChartBackend;
use shortlink_dashboard::infrastructure::http::HttpAnalyticsRepository;
use shortlink_dashboard::infrastructure::page::{FileShortCode, FixedShortCode};
use shortlink_dashboard::infrastructure::render::{ChartJsFileBackend, TerminalBackend};
use shortlink_dashboard::infrastructure::telemetry::{self, TracingFailureSink};

type Dashboard = DashboardService<HttpAnalyticsRepository>;

/// Click-analytics dashboard for shortened URLs.
#[derive(Parser)]
#[command(name = "dashboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the analytics once and print them
    Show(Target),

    /// Keep the dashboard open; Enter refreshes, q quits
    Watch(Target),
}

/// Which link to inspect and where to draw its charts.
#[derive(Args)]
struct Target {
    /// Short code of the link (e.g. "abc123")
    #[arg(required_unless_present = "code_file", conflicts_with = "code_file")]
    code: Option<String>,

    /// Read the short code from this file on every refresh
    #[arg(long, value_name = "PATH")]
    code_file: Option<PathBuf>,

    /// Write Chart.js configs into DIR (overrides DASHBOARD_OUTPUT_DIR)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    match cli.command {
        Commands::Show(target) => show(&config, target).await,
        Commands::Watch(target) => watch(&config, target).await,
    }
}

/// Terminal chart output, held back until the counters have been printed.
///
/// Stays empty when charts are written to files.
#[derive(Clone, Default)]
struct ChartBuffer(Option<Arc<Mutex<Vec<u8>>>>);

impl ChartBuffer {
    /// Writes everything drawn since the last flush to stdout.
    fn flush(&self) -> io::Result<()> {
        let Some(buffer) = &self.0 else {
            return Ok(());
        };
        let drawn = {
            let mut buffer = buffer
                .lock()
                .map_err(|_| io::Error::other("chart buffer lock poisoned"))?;
            std::mem::take(&mut *buffer)
        };

        let mut out = io::stdout().lock();
        out.write_all(&drawn)?;
        out.flush()
    }
}

/// Wires the HTTP client, short-code source and chart backend together.
fn build_dashboard(config: &Config, target: Target) -> Result<(Dashboard, ChartBuffer)> {
    let repository = HttpAnalyticsRepository::new(config.base_url()?, config.fetch_timeout())
        .context("Failed to build analytics client")?;

    let code_source: Arc<dyn ShortCodeSource> = match (target.code, target.code_file) {
        (_, Some(path)) => Arc::new(FileShortCode::new(path)),
        (Some(code), None) => Arc::new(FixedShortCode::new(code)),
        (None, None) => anyhow::bail!("either a short code or --code-file is required"),
    };

    let (backend, charts): (Arc<dyn ChartBackend>, ChartBuffer) =
        match target.out.or_else(|| config.output_dir.clone()) {
            Some(dir) => {
                let backend = ChartJsFileBackend::new(&dir).with_context(|| {
                    format!("Failed to prepare chart directory {}", dir.display())
                })?;
                (Arc::new(backend), ChartBuffer::default())
            }
            None => {
                let buffer = Arc::new(Mutex::new(Vec::new()));
                let backend = TerminalBackend::new(Arc::clone(&buffer));
                (Arc::new(backend), ChartBuffer(Some(buffer)))
            }
        };

    let dashboard =
        DashboardService::new(Arc::new(repository), code_source, backend, Arc::new(TracingFailureSink))
            .with_fetch_timeout(config.fetch_timeout());
    Ok((dashboard, charts))
}

async fn show(config: &Config, target: Target) -> Result<()> {
    let (dashboard, charts) = build_dashboard(config, target)?;

    dashboard
        .init()
        .await
        .context("Failed to load link analytics")?;

    print_summary(&dashboard.state().await);
    charts.flush().context("Failed to write charts")?;
    Ok(())
}

/// Interactive loop.
///
/// Every Enter spawns its own refresh, so a slow fetch can be overtaken by a
/// newer one; only the newest result is applied.
async fn watch(config: &Config, target: Target) -> Result<()> {
    let (dashboard, charts) = build_dashboard(config, target)?;
    let dashboard = Arc::new(dashboard);

    println!(
        "{} {}",
        "👀 Watching".bright_blue().bold(),
        "(Enter = refresh, q = quit)".bright_black()
    );
    println!();
    spawn_refresh(&dashboard, &charts);

    let mut input = stdin_lines();
    loop {
        tokio::select! {
            line = input.recv() => match line {
                Some(line) if line.trim().eq_ignore_ascii_case("q") => break,
                Some(_) => spawn_refresh(&dashboard, &charts),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    println!("{}", "👋 Bye".bright_black());
    Ok(())
}

/// Counters are printed before the charts, matching the order the state and
/// widgets are updated in.
fn spawn_refresh(dashboard: &Arc<Dashboard>, charts: &ChartBuffer) {
    let dashboard = Arc::clone(dashboard);
    let charts = charts.clone();
    tokio::spawn(async move {
        match dashboard.refresh().await {
            Ok(RefreshOutcome::Applied) => print_summary(&dashboard.state().await),
            Ok(RefreshOutcome::Superseded) => return,
            // Already logged by the failure sink; the last good data stays on screen.
            Err(e) => eprintln!("{} {}", "⚠️  data unavailable:".yellow().bold(), e),
        }
        if let Err(e) = charts.flush() {
            tracing::warn!(error = %e, "failed to write charts");
        }
    });
}

/// Forwards stdin lines from a dedicated thread.
///
/// A plain thread keeps a pending read from blocking runtime shutdown.
fn stdin_lines() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(8);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Prints the counters, traffic sources and latest clicks.
///
/// # Output Format
///
/// ```text
/// 📊 Link Analytics
///
///   Total clicks       42
///   Unique visitors    17
///   Avg clicks / day   3.50
///   Peak hour          1:00 PM
/// ```
fn print_summary(state: &DashboardState) {
    println!("{}", "📊 Link Analytics".bright_blue().bold());
    println!();
    println!(
        "  {:<18} {}",
        "Total clicks",
        state.total_clicks.to_string().bright_yellow().bold()
    );
    println!(
        "  {:<18} {}",
        "Unique visitors",
        state.unique_visitors.to_string().bright_yellow()
    );
    println!(
        "  {:<18} {}",
        "Avg clicks / day",
        format!("{:.2}", state.avg_clicks_per_day).bright_yellow()
    );
    println!("  {:<18} {}", "Peak hour", state.peak_hour_label().cyan());
    println!();

    print_sources(&state.clicks_by_source);
    print_latest_clicks(state);
}

fn print_sources(sources: &SourceBreakdown) {
    println!("{}", "Traffic sources".bright_white().bold());
    println!("  {:<18} {}", "Direct", sources.direct);
    println!("  {:<18} {}", "Social media", sources.social_total());
    for (network, clicks) in &sources.social_media {
        println!("    {:<16} {}", network.bright_black(), clicks);
    }
    println!("  {:<18} {}", "Search engines", sources.search_total());
    for (engine, clicks) in &sources.search_engines {
        println!("    {:<16} {}", engine.bright_black(), clicks);
    }
    if !sources.other_referrers.is_empty() {
        println!(
            "  {:<18} {}",
            "Other referrers",
            sources.other_referrers.join(", ").bright_black()
        );
    }
    println!();
}

fn print_latest_clicks(state: &DashboardState) {
    let clicks = state.latest_click_summaries();

    println!("{}", "Latest clicks".bright_white().bold());
    if clicks.is_empty() {
        println!("  {}", "No clicks yet".yellow());
        println!();
        return;
    }

    println!(
        "  {:<26} {:<10} {:<12} {:<20} {}",
        "Time".bright_white().bold(),
        "Device".bright_white().bold(),
        "OS".bright_white().bold(),
        "Browser".bright_white().bold(),
        "Referrer".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for click in &clicks {
        println!(
            "  {:<26} {:<10} {:<12} {:<20} {}",
            click.clicked_at.bright_black(),
            click.device_type,
            click.os,
            click.browser.cyan(),
            click.referrer
        );
    }
    println!();
}
