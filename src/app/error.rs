//! Client Error Types
//!
//! One error type covers everything that can go wrong between the UI and
//! the catalog API. Every variant converts to a user-facing message via
//! [`ApiError::user_message`]; views display that message and never let an
//! error propagate further.

use thiserror::Error;

/// Errors produced by the catalog API client and the form validation gate
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// A required field was empty; caught before any network call
    #[error("validation error: {0}")]
    Validation(String),

    /// The server answered 401 or 403
    #[error("access denied")]
    AccessDenied,

    /// No usable response: connect failure, timeout, broken transport
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response, with the server's message when it sent one
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A 2xx response whose body did not decode
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Best available message for an alert: the server-provided one when
    /// there is one, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::AccessDenied => "Access denied. You are not authorized.".to_string(),
            Self::Network(_) => "Network error. Please try again.".to_string(),
            Self::Server { message, .. } => message.clone(),
            Self::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }

    /// True for 401/403 responses
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message_is_shown_verbatim() {
        let error = ApiError::validation("Please fill all fields");
        assert_eq!(error.user_message(), "Please fill all fields");
    }

    #[test]
    fn test_server_message_wins_over_fallback() {
        let error = ApiError::server(500, "ISBN already exists");
        assert_eq!(error.user_message(), "ISBN already exists");
    }

    #[test]
    fn test_network_error_uses_generic_message() {
        let error = ApiError::network("connection refused");
        assert_eq!(error.user_message(), "Network error. Please try again.");
    }

    #[test]
    fn test_access_denied_detection() {
        assert!(ApiError::AccessDenied.is_access_denied());
        assert!(!ApiError::network("timeout").is_access_denied());
    }

    #[test]
    fn test_display_includes_status() {
        let error = ApiError::server(404, "not found");
        let display = format!("{}", error);
        assert!(display.contains("404"));
        assert!(display.contains("not found"));
    }
}
