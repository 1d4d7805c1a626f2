//! src/logging.rs
//!
//! File-only tracing setup. The terminal belongs to the UI, so nothing is
//! ever written to stdout or stderr while the browser runs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`. Keep the returned guard
    /// alive until exit so buffered lines are flushed.
    ///
    /// `RUST_LOG` wins over `default_level`.
    pub fn init_tracing(log_dir: &Path, default_level: &str) -> Result<WorkerGuard> {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("cannot create log dir {}", log_dir.display()))?;

        // daily rolling file appender → <log_dir>/dirnav.log.YYYY-MM-DD
        let file_appender = rolling::daily(log_dir, "dirnav.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let filter = Self::filter(default_level)?;

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .try_init()
            .context("tracing subscriber already set")?;

        Ok(guard)
    }

    /// Like [`Logger::init_tracing`], but a failure only costs the log
    /// file: one line goes to stderr (the terminal is not in raw mode yet)
    /// and the browser runs without a subscriber.
    pub fn init_or_warn(log_dir: Option<&Path>, default_level: &str) -> Option<WorkerGuard> {
        let Some(log_dir) = log_dir else {
            eprintln!("dirnav: no log directory available, logging disabled");
            return None;
        };

        match Self::init_tracing(log_dir, default_level) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("dirnav: logging disabled: {e:#}");
                None
            }
        }
    }

    fn filter(default_level: &str) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(default_level)
                .with_context(|| format!("invalid log level {default_level:?}")),
        }
    }
}
