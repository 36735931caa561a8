//! # API Errors
//!
//! One error type for every handler, mapped onto HTTP statuses with a
//! JSON `error` field in the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use grounds_parts::{DimensionError, PartError};
use thiserror::Error;

/// Errors surfaced by the web facade.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request validation failed; no generator was invoked
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown session or file
    #[error("Not found: {0}")]
    NotFound(String),

    /// A generator or the geometry kernel failed
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Filesystem error while handling session output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive construction failed
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl From<DimensionError> for ApiError {
    fn from(err: DimensionError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<PartError> for ApiError {
    fn from(err: PartError) -> Self {
        match err {
            PartError::Dimension(inner) => ApiError::Validation(inner.to_string()),
            PartError::Mesh(inner) => ApiError::Generation(inner.to_string()),
        }
    }
}

impl From<grounds_io::IoError> for ApiError {
    fn from(err: grounds_io::IoError) -> Self {
        ApiError::Generation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Generation(_) | ApiError::Io(_) | ApiError::Zip(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_422() {
        let response = ApiError::Validation("boxLength out of range".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::NotFound("session".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_dimension_error_becomes_validation() {
        let dims = grounds_parts::Dimensions {
            box_length: 10.0,
            ..Default::default()
        };
        let err: ApiError = dims.validate().unwrap_err().into();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
