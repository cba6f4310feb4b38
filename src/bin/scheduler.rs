use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use shroud::config::AppConfig;
use shroud::services::silhouette::http::HttpSilhouette;
use shroud::services::silhouette::{SilhouetteApi, EVENT_WINDOW, PUBLISHED_EVENT};
use shroud::utils::metrics::AttemptCounters;
use shroud::utils::stopwatch::Stopwatch;
use shroud::utils::timeparse::parse_duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Run,
    Test,
    Ping,
}

/// Companion scheduler: polls Silhouette for undispatched work on an
/// interval and records attempt counters to a local file.
#[derive(Debug, Parser)]
#[command(name = "scheduler", about = "Shroud scheduler/runner")]
struct Args {
    /// Operational mode.
    #[arg(long, value_enum, default_value = "run")]
    mode: Mode,

    /// Do not perform side-effecting actions (safe simulation).
    #[arg(long)]
    dry_run: bool,

    /// Cycle interval, e.g. "30s", "5m", "1h". Used with --loop.
    #[arg(long, default_value = "5m")]
    interval: String,

    /// Run continuously at the given interval instead of a single cycle.
    #[arg(long = "loop")]
    run_loop: bool,

    /// Path to the attempt-counter file. Defaults to METRICS_PATH.
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Log filter, e.g. "info" or "debug".
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let config = AppConfig::from_env();
    let dry_run = args.dry_run || config.dry_run;
    let metrics_path = args
        .metrics
        .unwrap_or_else(|| PathBuf::from(&config.metrics_path));
    let interval = parse_duration(&args.interval)?;

    match args.mode {
        Mode::Ping => {
            tracing::info!("pong");
            return Ok(());
        }
        Mode::Test => {
            parse_duration("5m")?;
            tracing::info!("self-check passed, test mode complete");
            return Ok(());
        }
        Mode::Run => {}
    }

    tracing::info!(
        dry_run,
        once = !args.run_loop,
        metrics = %metrics_path.display(),
        "scheduler starting"
    );

    let silhouette = HttpSilhouette::new(&config.silhouette_base)?;

    let mut counters = AttemptCounters::load(&metrics_path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load counters, starting from zero");
        AttemptCounters::default()
    });

    loop {
        let sw = Stopwatch::start();
        let ok = match run_cycle(&silhouette, dry_run).await {
            Ok(pending) => {
                tracing::info!(pending, took_ms = sw.elapsed_ms(), "cycle complete");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "cycle failed");
                false
            }
        };

        counters.observe_attempt(ok, sw.elapsed_ms());
        if let Err(e) = counters.save(&metrics_path) {
            tracing::warn!(error = %e, "failed to save counters");
        }

        if !args.run_loop {
            break;
        }
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted, stopping");
                break;
            }
        }
    }

    tracing::info!("scheduler finished");
    Ok(())
}

/// One pass: poll the recent event stream and dispatch anything not yet
/// published. Dispatch stays a log line under dry-run.
async fn run_cycle(silhouette: &dyn SilhouetteApi, dry_run: bool) -> anyhow::Result<usize> {
    let stream = silhouette.events(0, EVENT_WINDOW).await?;
    let pending = stream
        .events
        .iter()
        .filter(|e| e.kind != PUBLISHED_EVENT)
        .count();

    if pending == 0 {
        tracing::info!("no pending work");
    } else if dry_run {
        tracing::info!(pending, "[dry run] would dispatch pending jobs");
    } else {
        tracing::info!(pending, "dispatching pending jobs");
    }
    Ok(pending)
}
