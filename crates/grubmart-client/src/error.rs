//! Error types for the backend API client

use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, invalid body
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status
    #[error("Backend returned HTTP {status}")]
    Status {
        /// Response status code
        status: reqwest::StatusCode,
    },

    /// The backend answered `success: false`, carrying its own message
    #[error("{message}")]
    Backend {
        /// Message reported by the backend
        message: String,
    },

    /// The backend reported success but the expected payload was missing
    #[error("Backend reported success without a payload")]
    MissingData,
}

impl ClientError {
    /// Create a backend-reported failure
    #[must_use]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Whether the error came from an explicit `success: false` response
    #[must_use]
    pub const fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_backend_error_uses_server_message() {
        let error = ClientError::backend("Food item not found");
        assert_eq!(format!("{error}"), "Food item not found");
        assert!(error.is_backend());
    }

    #[test]
    fn test_status_error_display() {
        let error = ClientError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(format!("{error}"), "Backend returned HTTP 500 Internal Server Error");
        assert!(!error.is_backend());
    }
}
