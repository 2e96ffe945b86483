//! # Northwind data access bootstrap
//!
//! Loads configuration, connects to MySQL, applies migrations when asked,
//! and verifies that every DAO can be resolved.

use northwind_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use northwind_core::{telemetry::try_init_logging, NorthwindResult};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = load_config().await;

    let observability = config
        .as_ref()
        .map(|config| config.observability.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&observability) {
        eprintln!("{e}");
    }

    info!("Starting Northwind data access bootstrap...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let result = match config {
        Ok(config) => northwind_app::startup::run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn load_config() -> NorthwindResult<AppConfig> {
    let loader = ConfigLoader::from_default_location()?;
    Ok(loader.get().await)
}

fn init_logging(observability: &ObservabilityConfig) -> NorthwindResult<()> {
    try_init_logging(&observability.log_level, observability.log_format)
}
