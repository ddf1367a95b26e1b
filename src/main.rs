//! Resource API Server Entry Point
//!
//! Initializes logging, loads configuration, constructs the in-memory
//! store, and runs the HTTP server. A startup failure (e.g., the port is
//! already bound) is logged and terminates the process with a non-zero
//! exit status.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use resource_api_server::core::{Config, HttpServer};
use resource_api_server::domains::resources::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // The store is constructed here, once, and handed to the server;
    // it holds no state beyond the process lifetime.
    let state = AppState::new();

    let server = HttpServer::new(config.http);
    if let Err(e) = server.run(state).await {
        error!("{e}");
        std::process::exit(1);
    }

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
