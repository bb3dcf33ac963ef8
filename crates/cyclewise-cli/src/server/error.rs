//! API error types and handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use cyclewise::CyclewiseError;
use cyclewise::session::UPLOAD_WARNING;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client.
    BadRequest(String),
    /// The server failed for reasons unrelated to the request.
    Internal(String),
    /// Error from the cyclewise library.
    Cyclewise(CyclewiseError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg.clone()),
            ApiError::Cyclewise(e) => match e {
                CyclewiseError::MissingInput => (
                    StatusCode::CONFLICT,
                    "missing_input",
                    UPLOAD_WARNING.to_string(),
                ),
                CyclewiseError::InvalidMetric { .. } => {
                    (StatusCode::BAD_REQUEST, "invalid_metric", e.to_string())
                }
                CyclewiseError::EmptyDataset => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "empty_dataset", e.to_string())
                }
                CyclewiseError::Csv(_)
                | CyclewiseError::Encoding(_)
                | CyclewiseError::Shape(_)
                | CyclewiseError::EmptyData(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "invalid_upload", e.to_string())
                }
                CyclewiseError::Io { .. } | CyclewiseError::Json(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal", e.to_string())
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = self.parts();

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<CyclewiseError> for ApiError {
    fn from(err: CyclewiseError) -> Self {
        ApiError::Cyclewise(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Cyclewise(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}
