//! HTTP handlers for the resource CRUD routes.
//!
//! Each handler is a thin translation from a (validated) request to a store
//! call and an HTTP response. Validation always runs before the store is
//! touched, so a rejected body leaves the collection and the id counter
//! unchanged.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::info;

use super::error::ResourceError;
use super::model::Resource;
use super::schema;
use super::store::{ResourceStore, SharedStore};

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The resource store, guarded for the multi-threaded runtime.
    pub store: SharedStore,
}

impl AppState {
    /// Fresh state holding an empty store.
    pub fn new() -> Self {
        Self {
            store: ResourceStore::shared(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// `GET /api/resources` - the full collection, in insertion order.
pub async fn list_resources(State(state): State<AppState>) -> Json<Vec<Resource>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

/// `GET /api/resources/{id}` - a single resource.
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, ResourceError> {
    let id = parse_id(&id)?;
    let store = state.store.read().await;
    let resource = store.get(id)?.clone();
    Ok(Json(resource))
}

/// `POST /api/resources` - validate the body, then create.
pub async fn create_resource(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ResourceError> {
    let input = schema::parse_body(&body)?;

    let mut store = state.store.write().await;
    let resource = store.create(input);
    info!(id = resource.id, "created resource");

    Ok((StatusCode::CREATED, Json(resource)))
}

/// `PUT /api/resources/{id}` - validate the body, then merge it into the
/// stored record. The id field is never altered by an update.
pub async fn update_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Resource>, ResourceError> {
    let id = parse_id(&id)?;
    let input = schema::parse_body(&body)?;

    let mut store = state.store.write().await;
    let resource = store.update(id, input.into())?;
    info!(id, "updated resource");

    Ok(Json(resource))
}

/// `DELETE /api/resources/{id}`.
///
/// Replies 204 carrying an informational JSON body naming the deleted id.
/// That matches the documented surface; the HTTP stack may elide the body
/// on the wire, since 204 forbids one.
pub async fn delete_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ResourceError> {
    let id = parse_id(&id)?;

    let mut store = state.store.write().await;
    let deleted = store.delete(id)?;
    info!(id = deleted, "deleted resource");

    let body = json!({
        "message": format!("Record with ID {deleted} successfully deleted")
    });
    Ok((StatusCode::NO_CONTENT, Json(body)).into_response())
}

/// Route parameter → id.
///
/// A value that does not parse as an integer cannot match any stored
/// resource, so it is reported as not-found rather than as a bad request.
fn parse_id(raw: &str) -> Result<u64, ResourceError> {
    raw.parse().map_err(|_| ResourceError::NotFound)
}
