use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::translate::TranslateError;

/// Errors surfaced by the HTTP handlers as `{"error": ...}` bodies
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Text must be provided")]
    MissingText,

    /// Body is not a valid translation request
    #[error("{0}")]
    MalformedBody(String),

    /// Body was refused before parsing (too large, wrong content type)
    #[error("{message}")]
    RejectedBody { status: StatusCode, message: String },

    #[error(transparent)]
    Translation(#[from] TranslateError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingText | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::RejectedBody { status, .. } => *status,
            Self::Translation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        if status == StatusCode::PAYLOAD_TOO_LARGE || status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
            Self::RejectedBody {
                status,
                message: rejection.body_text(),
            }
        } else {
            Self::MalformedBody(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"error": self.to_string()}))).into_response()
    }
}
