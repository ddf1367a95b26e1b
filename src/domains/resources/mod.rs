//! The resources domain: the CRUD collection served under `/api/resources`.
//!
//! - [`model`] - the resource entity and write payloads
//! - [`store`] - the in-memory sequence and id counter
//! - [`schema`] - required-field validation of write bodies
//! - [`handlers`] - axum handlers mapping requests to store calls
//! - [`error`] - domain errors and their HTTP mapping

pub mod error;
pub mod handlers;
pub mod model;
pub mod schema;
pub mod store;

pub use error::ResourceError;
pub use handlers::AppState;
pub use model::{Resource, ResourceInput, ResourcePatch};
pub use store::{ResourceStore, SharedStore};
