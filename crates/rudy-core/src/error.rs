//! Error Types

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Fallback text shown when a failed submission carries no server detail
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors produced by an [`ApiClient`](crate::client::ApiClient)
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("Request failed with status {status}")]
    Response {
        status: u16,
        /// Human readable reason supplied by the server (`{"detail": "..."}`)
        detail: Option<String>,
    },

    /// Transport failure (connection refused, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request was rejected before leaving the client
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Server-supplied detail, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Response { detail, .. } => detail.as_deref(),
            Self::Validation(err) => Some(err.user_message()),
            _ => None,
        }
    }

    /// Message to put in front of the user after a failed submission
    pub fn user_message(&self) -> String {
        self.detail()
            .map_or_else(|| GENERIC_FAILURE_MESSAGE.to_string(), str::to_string)
    }
}

/// Waitlist form validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,

    #[error("email is required")]
    MissingEmail,

    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}

impl ValidationError {
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingName => "Please enter your name.",
            Self::MissingEmail => "Please enter your email address.",
            Self::InvalidEmail(_) => "Please enter a valid email address.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins_over_generic_message() {
        let err = ApiError::Response {
            status: 409,
            detail: Some("This email is already on the waiting list.".into()),
        };
        assert_eq!(err.user_message(), "This email is already on the waiting list.");
    }

    #[test]
    fn test_generic_message_without_detail() {
        let err = ApiError::Response { status: 500, detail: None };
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(err.detail(), None);

        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
