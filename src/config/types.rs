//! Configuration Types

use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub artifact: ArtifactConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// HTTP server binding
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Pipeline artifact location
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactConfig {
    /// Path of the serialized pipeline, read once at startup.
    #[serde(default = "default_artifact_path")]
    pub path: PathBuf,
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from("artifacts/pipeline.json")
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            path: default_artifact_path(),
        }
    }
}

/// Telemetry sink behavior
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetryConfig {
    /// Push one info event through the sink at startup to verify wiring.
    #[serde(default)]
    pub startup_self_test: bool,
}

/// Logging output
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
