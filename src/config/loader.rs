//! Configuration Loader
//!
//! Multi-source configuration, priority from high to low:
//! 1. Environment variables
//! 2. Configuration file (config.toml)
//! 3. Defaults

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Config file search names, without extension.
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Environment variables use the `MOODWIRE_` prefix with `__` as the
/// section separator, e.g.:
/// - `MOODWIRE_SERVER__HOST=127.0.0.1`
/// - `MOODWIRE_SERVER__PORT=8080`
/// - `MOODWIRE_ARTIFACT__PATH=/data/pipeline.json`
/// - `MOODWIRE_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load from an explicit config file instead of the default search paths.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // Defaults (lowest priority).
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("artifact.path", "artifacts/pipeline.json")?
        .set_default("telemetry.startup_self_test", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // Config file, if any.
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // Environment variables (highest priority).
    builder = builder.add_source(
        Environment::with_prefix("MOODWIRE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.artifact.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Artifact path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Startup configuration dump.
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Artifact: {}", config.artifact.path.display());
    tracing::info!(
        "Telemetry Startup Self-Test: {}",
        config.telemetry.startup_self_test
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log JSON: {}", config.log.json);
    tracing::info!("=================================");
}
