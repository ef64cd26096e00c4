use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::gateway::{GatewayError, PERMISSION_MESSAGE};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// Non-2xx upstream response surfaced with the upstream status code.
    #[error("upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },
    #[error("{0}")]
    BadGateway(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Permission => AppError::Forbidden(PERMISSION_MESSAGE.to_string()),
            GatewayError::Validation(msg) => AppError::BadRequest(msg),
            GatewayError::Upstream { status: 404, message } => AppError::NotFound(message),
            GatewayError::Upstream { status, message } => AppError::Upstream { status, message },
            GatewayError::Network(msg) => AppError::BadGateway(msg),
        }
    }
}
