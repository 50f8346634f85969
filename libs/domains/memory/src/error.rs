use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type MemoryResult<T> = Result<T, MemoryError>;

impl From<qdrant_client::QdrantError> for MemoryError {
    fn from(err: qdrant_client::QdrantError) -> Self {
        MemoryError::Store(err.to_string())
    }
}

impl From<serde_json::Error> for MemoryError {
    fn from(err: serde_json::Error) -> Self {
        MemoryError::Internal(format!("JSON error: {}", err))
    }
}

/// Convert MemoryError to AppError for standardized HTTP error responses.
///
/// Configuration, embedding and store failures all surface as 500s whose
/// message carries the underlying error text; only input validation maps
/// to a client error.
impl From<MemoryError> for AppError {
    fn from(err: MemoryError) -> Self {
        match err {
            MemoryError::Config(msg) => {
                AppError::InternalServerError(format!("Configuration error: {}", msg))
            }
            MemoryError::Embedding(msg) => {
                AppError::InternalServerError(format!("Embedding error: {}", msg))
            }
            MemoryError::Store(msg) => {
                AppError::InternalServerError(format!("Vector store error: {}", msg))
            }
            MemoryError::Validation(msg) => AppError::BadRequest(msg),
            MemoryError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for MemoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
