//! Configuration loader with layered sources.

use crate::{AppConfig, DatabaseConfig};
use config::{Config, ConfigError, Environment, File};
use northwind_core::NorthwindError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use url::Url;

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Uncommitted local overrides
    /// 4. Environment variables with `NORTHWIND__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, NorthwindError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, NorthwindError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), NorthwindError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, NorthwindError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("NORTHWIND_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for layer in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{layer}.toml");
            if Path::new(&path).exists() {
                debug!("Loading {} config from: {}", layer, path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("NORTHWIND")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_northwind_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Validates the configuration.
///
/// # Errors
///
/// Returns [`NorthwindError::Configuration`] describing the first problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), NorthwindError> {
    validate_database(&config.database)
}

fn validate_database(database: &DatabaseConfig) -> Result<(), NorthwindError> {
    if database.url.is_empty() {
        return Err(NorthwindError::Configuration("Database URL is required".to_string()));
    }

    let url = Url::parse(&database.url)
        .map_err(|e| NorthwindError::Configuration(format!("Invalid database URL: {e}")))?;
    if url.scheme() != "mysql" {
        return Err(NorthwindError::Configuration(format!(
            "Unsupported database scheme '{}', expected 'mysql'",
            url.scheme()
        )));
    }

    if database.max_connections == 0 {
        return Err(NorthwindError::Configuration(
            "max_connections must be at least 1".to_string(),
        ));
    }
    if database.min_connections > database.max_connections {
        return Err(NorthwindError::Configuration(format!(
            "min_connections ({}) exceeds max_connections ({})",
            database.min_connections, database.max_connections
        )));
    }
    if database.statement_timeout_secs == Some(0) {
        return Err(NorthwindError::Configuration(
            "statement_timeout_secs must be positive when set".to_string(),
        ));
    }

    Ok(())
}

fn config_error_to_northwind_error(err: ConfigError) -> NorthwindError {
    NorthwindError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(
            config.database.statement_timeout(),
            Some(std::time::Duration::from_secs(30))
        );
    }

    #[test]
    fn test_rejects_non_mysql_scheme() {
        let mut config = AppConfig::default();
        config.database.url = "postgres://localhost/northwind".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("postgres"));
    }

    #[test]
    fn test_rejects_unparsable_url() {
        let mut config = AppConfig::default();
        config.database.url = "not a url".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(NorthwindError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_pool_bounds() {
        let mut config = AppConfig::default();
        config.database.min_connections = 20;
        config.database.max_connections = 5;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("min_connections"));
    }

    #[test]
    fn test_rejects_zero_statement_timeout() {
        let mut config = AppConfig::default();
        config.database.statement_timeout_secs = Some(0);
        assert!(validate_config(&config).is_err());

        config.database.statement_timeout_secs = None;
        assert!(validate_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_loads_and_reloads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("default.toml");
        fs::write(
            &default_path,
            "[database]\nurl = \"mysql://app:secret@db:3306/northwind\"\nmax_connections = 4\n",
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy().to_string()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.database.url, "mysql://app:secret@db:3306/northwind");
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.database.min_connections, 1);

        fs::write(
            &default_path,
            "[database]\nurl = \"mysql://app:secret@db:3306/northwind\"\nmax_connections = 8\n",
        )
        .unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.database.max_connections, 8);
    }

    #[test]
    fn test_local_layer_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[observability]\nlog_level = \"info\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("local.toml"),
            "[observability]\nlog_level = \"debug\"\nlog_format = \"json\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_config(&dir.path().to_string_lossy()).unwrap();
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(
            config.observability.log_format,
            northwind_core::telemetry::LogFormat::Json
        );
    }
}
