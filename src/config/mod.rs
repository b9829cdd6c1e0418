//! Configuration
//!
//! Layered loading (env vars > config file > defaults) and validation.

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, ArtifactConfig, LogConfig, ServerConfig, TelemetryConfig};
