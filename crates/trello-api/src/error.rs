//! Error types for the Trello API client.

use thiserror::Error;

/// Result type for Trello API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error returned by every client operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Trello answered with a non-success status, or a request was rejected locally.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The client could not be configured.
    #[error("configuration error: {message}")]
    Config {
        /// What was missing or malformed.
        message: String,
    },

    /// An operation was called on a resource that carries no client handle.
    #[error("{resource} is not bound to a client")]
    Unbound {
        /// The resource kind, e.g. "board".
        resource: &'static str,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns the API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors reported by the Trello API or raised by local request validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Authentication failure (invalid key or token, or no access).
    #[error("Auth error: {message}")]
    Auth { message: String },

    /// Resource not found.
    #[error("not found: {path}")]
    NotFound { path: String },

    /// Request rejected, either by Trello (400) or before it was sent.
    #[error("Validation error{}: {message}", on_field(.field))]
    Validation {
        field: Option<String>,
        message: String,
    },
}

impl ApiError {
    /// Creates a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Returns the HTTP status for variants that pin one down.
    ///
    /// `Auth` covers both 401 and 403, and `Validation` is also raised locally
    /// before any request is sent, so both return `None`.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Auth { .. } | ApiError::Validation { .. } => None,
        }
    }
}

fn on_field(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|f| format!(" on {f}"))
        .unwrap_or_default()
}
