use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use storage::error::StorageError;

/// Per-request failures. Each one ends the request with a 500 and the
/// error text as a plain-text body; the process keeps serving.
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Serialization(serde_json::Error),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "{}", e),
            Self::Serialization(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for WebError {}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage(e) => tracing::error!("Storage error: {:?}", e),
            Self::Serialization(e) => tracing::error!("Serialization error: {:?}", e),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<serde_json::Error> for WebError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
