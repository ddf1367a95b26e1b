//! Request-body validation for resource writes.
//!
//! Create and update share one fixed schema: `name` and `description` must
//! both be present and both be strings. Validation runs as a distinct step
//! on the raw JSON body, before anything touches the store, and produces
//! the typed [`ResourceInput`] on success.

use serde_json::Value;

use super::error::ResourceError;
use super::model::ResourceInput;

/// Check `body` against the write schema and produce the typed input.
///
/// Any `id` carried in the body is ignored: ids are server-assigned and
/// never trusted from the client.
pub fn parse_body(body: &Value) -> Result<ResourceInput, ResourceError> {
    let name = require_string(body, "name")?;
    let description = require_string(body, "description")?;

    Ok(ResourceInput { name, description })
}

fn require_string(body: &Value, field: &'static str) -> Result<String, ResourceError> {
    match body.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ResourceError::wrong_type(field)),
        None => Err(ResourceError::missing_field(field)),
    }
}
