//! Structured logging for the fastmatch tools
//!
//! This crate provides:
//! - Subscriber setup with `tracing-subscriber` (compact or JSON, to stderr)
//! - `RUST_LOG` overrides on top of the configured level
//! - Timers and spans around long-running operations

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use tracing;

/// Initialize logging with the default configuration
pub fn init() -> anyhow::Result<()> {
    init_with_config(TelemetryConfig::default())
}

/// Initialize with custom configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        tracing::subscriber::set_global_default(
            registry.with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target),
            ),
        )
    } else {
        tracing::subscriber::set_global_default(
            registry.with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .compact(),
            ),
        )
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        level = %config.log_level,
        json = config.json,
        "Logging initialized"
    );

    Ok(())
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub show_target: bool,
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            show_target: false,
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Raise the level to `debug` for `--verbose` runs
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log_level = "debug".to_string();
        }
        self
    }
}

/// Timer for measuring operation duration
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Time since the timer started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and log the duration
    pub fn stop(self) -> Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.name,
            duration_ms = duration.as_millis(),
            "Timer completed"
        );
        duration
    }
}

/// Span for tracing operations
///
/// Opens an `info` span for the rest of the enclosing block and logs its
/// duration at `debug` when the block ends.
#[macro_export]
macro_rules! timed_span {
    ($name:expr) => {
        let _timer = $crate::TimerGuard($crate::Timer::start($name));
        let _span = $crate::tracing::info_span!($name).entered();
    };
    ($name:expr, $($field:tt)*) => {
        let _timer = $crate::TimerGuard($crate::Timer::start($name));
        let _span = $crate::tracing::info_span!($name, $($field)*).entered();
    };
}

/// Stops the wrapped timer on drop; used by [`timed_span!`]
pub struct TimerGuard(pub Timer);

impl Drop for TimerGuard {
    fn drop(&mut self) {
        let duration = self.0.elapsed();
        tracing::debug!(
            operation = %self.0.name,
            duration_ms = duration.as_millis(),
            "Timer completed"
        );
    }
}
