use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FILE: &str = "toolkit.log";
const DEFAULT_LOG_FILTER: &str =
    "vfxops=info,vfxops_scan=info,vfxops_tracking=info,vfxops_publish=info,vfxops_toolkit=info";

pub struct LogConfig<'a> {
    pub log_dir: &'a Path,
    pub verbose: bool,
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Non-blocking writer appending to `<log_dir>/toolkit.log`.
pub fn file_writer(log_dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir).with_context(|| format!("create log dir {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber: everything to the log file, warnings (or
/// everything, when verbose) to stderr. Keep the guard alive until exit.
pub fn init_logging(config: LogConfig<'_>) -> Result<WorkerGuard> {
    let (writer, guard) = file_writer(config.log_dir)?;
    let console_filter = if config.verbose {
        default_filter()
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(default_filter()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .try_init()
        .context("install tracing subscriber")?;
    Ok(guard)
}
