//! Logging bootstrap.
//!
//! Library code only emits `tracing` events. Installing a subscriber is left
//! to binaries, through [`try_init_logging`] behind the `telemetry` feature.

#[cfg(feature = "telemetry")]
use crate::{NorthwindError, NorthwindResult};
use serde::{Deserialize, Serialize};
#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_directive` when it is set.
///
/// # Errors
///
/// Returns [`NorthwindError::Configuration`] when the directive does not
/// parse or a global subscriber is already installed.
#[cfg(feature = "telemetry")]
pub fn try_init_logging(default_directive: &str, format: LogFormat) -> NorthwindResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| NorthwindError::Configuration(format!("Invalid log filter: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    installed.map_err(|e| NorthwindError::Configuration(format!("Failed to install log subscriber: {e}")))
}
