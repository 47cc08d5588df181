//! Error type returned by the event encoder.

use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::category::ErrorCategory;

/// Failure while writing an event to a sink.
///
/// Bytes written before the failure stay on the sink; the encoder does not
/// roll back or retry.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The sink rejected a write. Carries the sink's error unchanged.
    #[error("Failed to write event: {0}")]
    Write(#[from] io::Error),

    /// The structured payload could not be serialized as JSON.
    #[error("Failed to serialize event data: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl EncodeError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            EncodeError::Write(_) => ErrorCategory::Transport,
            EncodeError::Serialization(_) => ErrorCategory::Payload,
        }
    }

    /// Returns true if the sink failed.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, EncodeError::Write(_))
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            EncodeError::Write(_) => "E_SSE_WRITE",
            EncodeError::Serialization(_) => "E_SSE_SERIALIZE",
        }
    }
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json streams straight into the sink, so a sink failure
        // surfaces as an I/O-category serde error.
        if err.is_io() {
            EncodeError::Write(io::Error::from(err))
        } else {
            EncodeError::Serialization(err)
        }
    }
}

impl IntoResponse for EncodeError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
