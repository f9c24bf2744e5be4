use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Shown when a failure carries no usable text at all.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure of a collaborator operation, as seen by the controller.
pub trait Failure: fmt::Display {
    /// Message selected by the remote side for display, if any.
    fn structured_message(&self) -> Option<&str> {
        None
    }

    /// Structured message first, then `Display`, then the generic text.
    fn user_message(&self) -> String {
        if let Some(message) = self
            .structured_message()
            .map(str::trim)
            .filter(|m| !m.is_empty())
        {
            return message.to_string();
        }
        let described = self.to_string();
        if described.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            described
        }
    }
}

/// Error body returned by the products endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<ErrorBody> },

    #[error("network error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Builds a status error, keeping the body only if it parses as [`ErrorBody`].
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            body: serde_json::from_str(body).ok(),
        }
    }
}

impl Failure for ApiError {
    fn structured_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                body: Some(ErrorBody { message: Some(message) }),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

impl Failure for String {}

impl Failure for &str {}
