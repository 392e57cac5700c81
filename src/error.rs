use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(tapahtumatti::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(tapahtumatti::config))]
    Config(String),

    #[error("Model quota exhausted: {0}")]
    #[diagnostic(code(tapahtumatti::quota_exhausted))]
    QuotaExhausted(String),

    #[error("Completion request failed: {0}")]
    #[diagnostic(code(tapahtumatti::completion))]
    Completion(String),

    #[error("Malformed model response: {0}")]
    #[diagnostic(code(tapahtumatti::malformed_response))]
    MalformedResponse(String),

    #[error("Event validation error: {0}")]
    #[diagnostic(code(tapahtumatti::validation))]
    Validation(String),

    #[error(transparent)]
    #[diagnostic(code(tapahtumatti::io))]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    #[diagnostic(code(tapahtumatti::other))]
    Other(String),
}

/// Type alias for Result with our Error type
pub type ApiResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create validation errors
pub fn validation_error(message: &str) -> Error {
    Error::Validation(message.to_string())
}

// Quota exhaustion is the only per-request error that reaches the caller; it
// maps to 429 with a retry hint. Anything else that escapes is a plain 500
// without internal detail.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::QuotaExhausted(_) => (
                StatusCode::TOO_MANY_REQUESTS,
                "Model quota exhausted, please retry later",
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
