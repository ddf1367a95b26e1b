//! Resource API Server Library
//!
//! A minimal HTTP service exposing CRUD operations over a single in-memory
//! resource collection, with static-file serving and permissive CORS.
//!
//! # Architecture
//!
//! - **core**: infrastructure - configuration, error handling, and the
//!   axum HTTP server with its route table and middleware
//! - **domains**: business logic organized by bounded contexts
//!   - **resources**: the resource entity, its in-memory store, write-body
//!     validation, and the CRUD handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use resource_api_server::core::{Config, HttpServer};
//! use resource_api_server::domains::resources::AppState;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = HttpServer::new(config.http);
//!     server.run(AppState::new()).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, HttpServer, Result};
pub use crate::domains::resources::{AppState, Resource, ResourceStore};
