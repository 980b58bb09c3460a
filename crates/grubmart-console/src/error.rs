//! Error types for the admin console

use thiserror::Error;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Errors surfaced by the console layer
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Backend client failure
    #[error(transparent)]
    Client(#[from] grubmart_client::ClientError),

    /// Core error (configuration, parsing)
    #[error(transparent)]
    Core(#[from] grubmart_core::Error),

    /// Form or argument validation failure
    #[error("{message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// User-facing message
        message: String,
    },

    /// Filesystem failure (config file, image file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Create a validation error
    #[must_use]
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the error is a local validation failure rather than a
    /// backend or transport problem
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
