//! Tracing subscriber setup for the client binary.
//!
//! Stdout carries the game narration, so logs go either to a file in the
//! configured directory or to stderr.
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_FILE_NAME: &str = "arena.log";

/// Install the global subscriber.
///
/// `RUST_LOG` directives win; otherwise the file log records `info` and the
/// stderr log only `warn`. The returned guard flushes the file writer and
/// must live until the program exits.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    match log_dir {
        Some(dir) => {
            let (writer, guard) = file_writer(dir)?;
            tracing_subscriber::registry()
                .with(env_filter("info"))
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init()
                .context("failed to install tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter("warn"))
                .with(fmt::layer().with_writer(io::stderr))
                .try_init()
                .context("failed to install tracing subscriber")?;
            Ok(None)
        }
    }
}

/// Non-blocking writer appending to `<dir>/arena.log`.
pub fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
