//! Moodwire - sentiment classification inference service
//!
//! Startup order matters: the pipeline artifact is loaded exactly once
//! before the listener binds, so every request handler observes the same
//! immutable load result.

use std::sync::Arc;

use moodwire::application::TelemetrySink;
use moodwire::config::{load_config, print_config};
use moodwire::infrastructure::http::{AppState, HttpServer, ServerConfig};
use moodwire::infrastructure::load_artifacts;
use moodwire::infrastructure::telemetry::TracingTelemetrySink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (priority: env vars > config file > defaults).
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // Initialize logging.
    let log_filter = format!(
        "{},moodwire={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().with_env_filter(env_filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Moodwire - sentiment classification inference service");
    print_config(&config);

    // Telemetry sink; optionally verify the wiring with one info event.
    let telemetry: Arc<dyn TelemetrySink> = Arc::new(TracingTelemetrySink::new());
    if config.telemetry.startup_self_test {
        telemetry.self_test();
    }

    // One attempt, before serving begins. A failed load does not abort
    // startup; the server runs degraded and refuses predictions.
    let load_result = Arc::new(load_artifacts(&config.artifact.path));

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(load_result, telemetry);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
