//! HTTP error responses

use super::request::RequestError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use boxai_domain::RunMode;
use serde_json::json;
use thiserror::Error;
use tracing::error;

const GENERIC_MESSAGE: &str = "Something went wrong";

/// Errors surfaced by the HTTP boundary
///
/// Per-model failures never end up here; they are part of a 200 response.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client supplied an unusable payload (400)
    #[error("{0}")]
    Validation(String),

    /// Anything else (500). `detail` is only sent in development mode.
    #[error("Internal server error: {detail}")]
    Internal { detail: String, expose: bool },
}

impl ApiError {
    pub fn internal(detail: impl Into<String>, mode: RunMode) -> Self {
        Self::Internal {
            detail: detail.into(),
            expose: mode.is_development(),
        }
    }

    pub fn from_request(err: RequestError, mode: RunMode) -> Self {
        match err {
            RequestError::Invalid(message) => Self::Validation(message.to_string()),
            RequestError::Malformed(e) => Self::internal(format!("Malformed JSON body: {}", e), mode),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(message) => json!({ "error": message }),
            Self::Internal { detail, expose } => {
                error!(detail = %detail, "Request failed");
                if expose {
                    json!({
                        "error": "Internal server error",
                        "message": detail,
                        "details": detail,
                    })
                } else {
                    json!({
                        "error": "Internal server error",
                        "message": GENERIC_MESSAGE,
                    })
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
