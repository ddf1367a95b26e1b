//! Resource-specific error types and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    /// No resource holds the requested id.
    #[error("Resource not found")]
    NotFound,

    /// The request body is missing a required field.
    #[error("body is missing required field '{0}'")]
    MissingField(&'static str),

    /// A required field carries the wrong JSON type.
    #[error("body field '{0}' must be a string")]
    WrongType(&'static str),
}

impl ResourceError {
    /// Create a new "missing field" error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Create a new "wrong type" error.
    pub fn wrong_type(field: &'static str) -> Self {
        Self::WrongType(field)
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MissingField(_) | Self::WrongType(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ResourceError::NotFound;
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Resource not found");
    }

    #[test]
    fn test_body_errors_map_to_400() {
        assert_eq!(
            ResourceError::missing_field("name").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ResourceError::wrong_type("description").status(),
            StatusCode::BAD_REQUEST
        );
    }
}
