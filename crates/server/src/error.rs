use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::loader::LoadError;
use detection::DetectionError;

/// Request-level failures, mapped onto HTTP status codes.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No image URL provided")]
    MissingImageUrl,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Inference(#[from] DetectionError),

    #[error("request aborted: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingImageUrl => StatusCode::BAD_REQUEST,
            ApiError::Load(_) | ApiError::Inference(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
