//! Mapping from core errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use newsfeed_core::NewsError;

/// Handler error wrapping [`NewsError`]
#[derive(Debug)]
pub struct AppError(pub NewsError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            NewsError::Network { .. } | NewsError::Status { .. } => StatusCode::BAD_GATEWAY,
            NewsError::Parse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            NewsError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, status = status.as_u16(), "request failed");
        } else {
            tracing::warn!(error = %self.0, status = status.as_u16(), "request rejected");
        }
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl From<NewsError> for AppError {
    fn from(e: NewsError) -> Self {
        Self(e)
    }
}
