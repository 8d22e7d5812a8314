use serde::Deserialize;
use thiserror::Error;

use stockroom_core::DomainError;

/// Failure of a call against the inventory API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected locally before being sent.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode API response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Build an `Api` error from a non-success response body.
    ///
    /// Understands `{"detail": ..}` and `{"error": .., "message": ..}` bodies
    /// and falls back to the raw text.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            detail: Option<serde_json::Value>,
            message: Option<String>,
        }

        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                detail: Some(serde_json::Value::String(detail)),
                ..
            }) => detail,
            Ok(ErrorBody {
                detail: Some(detail),
                ..
            }) => detail.to_string(),
            Ok(ErrorBody {
                message: Some(message),
                ..
            }) => message,
            _ if body.trim().is_empty() => "empty response body".to_string(),
            _ => body.trim().to_string(),
        };

        ApiError::Api { status, message }
    }
}
