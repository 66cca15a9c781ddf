use std::sync::Arc;

use planner_core::model::Session;

use crate::auth_client::{AuthApi, AuthMode, Credentials};
use crate::error::AuthServiceError;
use crate::session_store::SessionStore;

/// Orchestrates a login or signup submission.
///
/// Validates the form locally, calls the auth endpoint, and hands the grant
/// to the `SessionStore`.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    sessions: Arc<SessionStore>,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, sessions: Arc<SessionStore>) -> Self {
        Self { api, sessions }
    }

    #[must_use]
    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    /// Submit credentials and establish a session.
    ///
    /// Blank credentials never reach the network.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::MissingCredentials` for blank fields,
    /// `AuthServiceError::Auth` when the endpoint rejects or cannot be reached,
    /// and `AuthServiceError::Session` when the session cannot be persisted.
    pub async fn submit(
        &self,
        mode: AuthMode,
        credentials: Credentials,
    ) -> Result<Session, AuthServiceError> {
        if !credentials.is_complete() {
            return Err(AuthServiceError::MissingCredentials);
        }

        let grant = match self.api.authenticate(mode, &credentials).await {
            Ok(grant) => grant,
            Err(err) => {
                tracing::warn!(
                    mode = mode.as_str(),
                    domain = credentials.email_domain(),
                    error = %err,
                    "authentication failed"
                );
                return Err(err.into());
            }
        };

        let session = self.sessions.login(grant.identity, grant.token).await?;
        tracing::info!(
            mode = mode.as_str(),
            domain = credentials.email_domain(),
            "authenticated"
        );
        Ok(session)
    }
}
