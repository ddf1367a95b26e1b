//! Configuration management for the resource API server.
//!
//! Defaults reproduce the service's fixed surface (port 3000 on all
//! interfaces, static files from `public/`); environment variables can
//! override them for local development and tests.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// HTTP listener and static-file settings.
    pub http: HttpConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Directory whose files are served under `/public`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: default_host(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "resource-api-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            http: HttpConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `API_`, e.g. `API_HTTP_PORT`,
    /// `API_LOG_LEVEL`. Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("API_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("API_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(port) = std::env::var("API_HTTP_PORT")
            && let Ok(port) = port.parse()
        {
            config.http.port = port;
        }

        if let Ok(host) = std::env::var("API_HTTP_HOST") {
            config.http.host = host;
        }

        if let Ok(dir) = std::env::var("API_STATIC_DIR") {
            config.http.static_dir = dir;
        }

        config
    }
}
