use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// User-facing message for a missing or blank question.
pub const MISSING_QUESTION_MESSAGE: &str = "Domanda mancante";
/// User-facing message when the completion credential is absent.
pub const MISSING_API_KEY_MESSAGE: &str = "API key non configurata";
/// User-facing message for every other failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Errore interno del server";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Server-side detail is logged here; the body only ever carries one of the
/// fixed messages above.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Completion credential is not configured")]
    Configuration,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration | AppError::Llm(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg) => {
                tracing::debug!("Rejected request: {msg}");
                MISSING_QUESTION_MESSAGE
            }
            AppError::Configuration => {
                tracing::error!("Completion credential missing (set CLAUDE_API_KEY)");
                MISSING_API_KEY_MESSAGE
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                INTERNAL_ERROR_MESSAGE
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                INTERNAL_ERROR_MESSAGE
            }
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
