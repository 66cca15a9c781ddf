use std::sync::{Arc, PoisonError, RwLock};

use planner_core::Clock;
use planner_core::model::{AuthToken, Session, SessionState, SessionStatus, UserIdentity};
use storage::repository::SessionRepository;

use crate::error::SessionStoreError;

/// Owner of the signed-in session.
///
/// This is the only writer of session state. Views read `snapshot()` and
/// call `login`/`logout`; nothing else mutates the session.
pub struct SessionStore {
    clock: Clock,
    repo: Arc<dyn SessionRepository>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// A store in the `Unresolved` state. Call `restore` once at startup.
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn SessionRepository>) -> Self {
        Self {
            clock,
            repo,
            state: RwLock::new(SessionState::Unresolved),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .status()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    /// Resolve the startup state from the persisted session.
    ///
    /// A no-op once the state is resolved. On storage failure the state
    /// still resolves, to `Anonymous`, before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Storage` if the persisted session cannot be read.
    pub async fn restore(&self) -> Result<SessionState, SessionStoreError> {
        if self.status() != SessionStatus::Unresolved {
            return Ok(self.snapshot());
        }

        match self.repo.load_session().await {
            Ok(Some(session)) => {
                tracing::info!(
                    established_at = %session.established_at(),
                    "restored persisted session"
                );
                self.resolve(SessionState::Authenticated(session));
            }
            Ok(None) => {
                tracing::debug!("no persisted session");
                self.resolve(SessionState::Anonymous);
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not read persisted session");
                self.resolve(SessionState::Anonymous);
                return Err(err.into());
            }
        }
        Ok(self.snapshot())
    }

    /// Record a freshly issued identity/token pair.
    ///
    /// The pair is persisted first; the in-memory state only becomes
    /// authenticated once that succeeds.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Storage` if the session cannot be persisted.
    pub async fn login(
        &self,
        identity: UserIdentity,
        token: AuthToken,
    ) -> Result<Session, SessionStoreError> {
        let session = Session::new(identity, token, self.clock.now());
        self.repo.save_session(&session).await?;
        self.replace(SessionState::Authenticated(session.clone()));
        tracing::info!("session established");
        Ok(session)
    }

    /// Drop the session. The in-memory state is anonymous afterwards even if
    /// the persisted copy could not be removed.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Storage` if the persisted copy cannot be removed.
    pub async fn logout(&self) -> Result<(), SessionStoreError> {
        self.replace(SessionState::Anonymous);
        if let Err(err) = self.repo.clear_session().await {
            tracing::warn!(error = %err, "could not remove persisted session");
            return Err(err.into());
        }
        tracing::info!("session cleared");
        Ok(())
    }

    fn resolve(&self, next: SessionState) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if *guard == SessionState::Unresolved {
            *guard = next;
        }
    }

    fn replace(&self, next: SessionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
