//! File logging.
//!
//! The terminal UI owns stdout, so every event goes to `glaze.log` in the
//! app's log directory through a non-blocking writer.

use std::fs;

use anyhow::{Context, Result};
use glaze_common::AppDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::args::LogLevel;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "GLAZE_LOG";

pub const LOG_FILE: &str = "glaze.log";

/// Flushes buffered log lines when dropped. Keep it alive for the whole run.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Filter from `GLAZE_LOG`, falling back to `level`.
pub fn build_filter(env_value: Option<&str>, level: LogLevel) -> EnvFilter {
    env_value
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_filter_str()))
}

pub fn init(dirs: &AppDirs, level: LogLevel) -> Result<LogGuard> {
    let logs_dir = dirs.logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let env_value = std::env::var(LOG_ENV).ok();
    tracing_subscriber::registry()
        .with(build_filter(env_value.as_deref(), level))
        .with(file_layer)
        .try_init()
        .context("failed to install the log subscriber")?;

    tracing::info!(version = glaze_core::VERSION, "glaze starting");
    Ok(LogGuard { _guard: guard })
}
