use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gus_engine::{GoError, SessionError};
use serde_json::json;

/// Errors returned to the client as `{"error": "message"}`.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Forbidden(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
        };
        (status, Json(json!({"error": message}))).into_response()
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::BadRequest(format!("malformed session: {e}"))
    }
}

impl From<GoError> for AppError {
    fn from(e: GoError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}
