mod actors;
mod engine;
mod models;
mod surface;
mod types;
mod views;

use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::{Session, SessionConfig, SessionEngine};
use crate::surface::MemorySurface;
use crate::views::{export_rows, write_export};

const REQUIRE_CATEGORY_FLAG: &str = "--require-category";
const BACKPRESSURE_FLAG: &str = "--backpressure=";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut require_category = false;
    let mut backpressure = None;
    let mut positional = Vec::new();

    for arg in &args {
        if arg == REQUIRE_CATEGORY_FLAG {
            require_category = true;
        } else if let Some(value) = arg.strip_prefix(BACKPRESSURE_FLAG) {
            match value.parse::<usize>() {
                Ok(capacity) if capacity > 0 => backpressure = Some(capacity),
                _ => eprintln!("Invalid backpressure '{}', using the default", value)
            }
        } else if arg.starts_with("--") {
            eprintln!("Unknown flag '{}', ignoring it", arg);
        } else {
            positional.push(arg);
        }
    }

    if positional.is_empty() {
        eprintln!("Usage: expense-tracker [events].csv [log_level:optional] [{REQUIRE_CATEGORY_FLAG}] [{BACKPRESSURE_FLAG}N] > [export].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = positional[0];
    let log_level = positional.get(1)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let surface = Arc::new(MemorySurface::new());
    let mut engine = SessionEngine::new(surface.clone())
        .with_config(SessionConfig { require_category });

    if let Some(capacity) = backpressure {
        engine = engine.with_backpressure(capacity);
    }

    let timer = Instant::now();
    let session = engine.run(path).await?;
    let duration = timer.elapsed();

    info!("Processed session events in: {duration:?}");
    log_summary(&session, &surface);

    write_export_to_stdout(&session)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the export, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn log_summary(session: &Session, surface: &MemorySurface) {
    let frame = surface.latest();
    let summary = frame.summary;

    if session.ledger.is_empty() {
        info!("Ledger is empty after [{}] rendered frames", surface.frames_rendered());
        return;
    }

    info!(
        "Ledger holds [{}] transactions | income [{}] | expense [{}] | balance [{}] | [{}] notifications raised",
        session.ledger.len(),
        summary.total_income,
        summary.total_expense,
        summary.available_balance,
        surface.notifications().len()
    );

    if session.budget.is_enabled() {
        info!("Budget limit [{}] against expense [{}]", session.budget.limit(), summary.total_expense);
    }

    for category in &summary.categories {
        info!("Category [{}]:[{}] total [{}] over [{}] transactions", category.category, category.transaction_type, category.total, category.count);
    }

    info!("[{}] transactions match search [{}]", frame.filtered.len(), session.search);

    let chart = &summary.chart;

    for ((label, expense), income) in chart.labels.iter().zip(&chart.expenses).zip(&chart.incomes) {
        debug!("Chart point [{label}] expense [{expense}] income [{income}]");
    }

    debug!("[{}] frames rendered, [{}] chart handles still live", surface.frames_rendered(), surface.live_charts());
}

fn write_export_to_stdout(session: &Session) -> Result<()> {
    let output = BufWriter::new(stdout().lock());

    write_export(output, &export_rows(session.ledger.as_slice()))?;

    Ok(())
}
