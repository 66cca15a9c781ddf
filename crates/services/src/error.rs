//! Shared error types for the services crate.

use thiserror::Error;

use planner_core::error::SessionError;
use storage::repository::StorageError;

/// Errors emitted while building `AuthConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthConfigError {
    #[error("invalid auth base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("auth base URL must use http or https, got {0}")]
    UnsupportedScheme(String),
}

/// Errors emitted by `HttpAuthApi`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("auth endpoint rejected the request with status {status}")]
    Rejected {
        status: reqwest::StatusCode,
        message: Option<String>,
    },
    #[error("auth response body could not be decoded")]
    Decode(#[source] serde_json::Error),
    #[error(transparent)]
    Identity(#[from] SessionError),
    #[error(transparent)]
    Endpoint(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `SessionStore`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthServiceError {
    #[error("email and password are required")]
    MissingCredentials,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

impl AuthServiceError {
    /// Text shown inline under the login form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AuthServiceError::MissingCredentials => "Email and password are required.".to_string(),
            AuthServiceError::Auth(AuthError::Rejected { message, .. }) => message
                .clone()
                .unwrap_or_else(|| "An error occurred".to_string()),
            AuthServiceError::Auth(_) => "Network error. Please try again.".to_string(),
            AuthServiceError::Session(_) => {
                "Could not save your session. Please try again.".to_string()
            }
        }
    }
}
