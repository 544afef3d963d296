//! Application-level errors.
//!
//! Wraps the transport failure, a server rejection, and the domain's
//! validation error behind one enum so services can use `?` everywhere.

use rackdash_domain::error::ValidationError;

use crate::ports::{ApiResponse, TransportError};

/// Every way a dashboard use-case can fail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request never reached the backend.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Rejected {
        /// HTTP status of the response.
        status: u16,
        /// The server's `message`, or the operation's fallback text.
        message: String,
    },

    /// A 2xx body did not have the expected shape.
    #[error("unexpected response body")]
    Decode(#[from] serde_json::Error),

    /// The input was rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AppError {
    /// Text to show the user for this failure.
    ///
    /// Rejections and form validation errors carry their own text. An
    /// unknown enum label, like anything else, falls back to the caller's
    /// per-operation message.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Validation(ValidationError::UnknownLabel { .. })
            | Self::Transport(_)
            | Self::Decode(_) => fallback.to_string(),
            Self::Validation(err) => err.to_string(),
        }
    }
}

/// Turn a non-2xx response into [`AppError::Rejected`], preferring the
/// server's `message` over `fallback`.
///
/// # Errors
///
/// Returns [`AppError::Rejected`] when the status is outside 200..300.
pub fn expect_success(response: ApiResponse, fallback: &str) -> Result<ApiResponse, AppError> {
    if response.is_success() {
        return Ok(response);
    }
    Err(AppError::Rejected {
        status: response.status_code,
        message: response.message().unwrap_or(fallback).to_string(),
    })
}
