use std::sync::Arc;

use services::{AuthService, SessionStore};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn session_store(&self) -> Arc<SessionStore>;
    fn auth_service(&self) -> Arc<AuthService>;
}

#[derive(Clone)]
pub struct AppContext {
    session_store: Arc<SessionStore>,
    auth_service: Arc<AuthService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_store: app.session_store(),
            auth_service: app.auth_service(),
        }
    }

    #[must_use]
    pub fn session_store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session_store)
    }

    #[must_use]
    pub fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth_service)
    }
}

// Provided by the application composition root (`crates/app`) via `LaunchBuilder::with_context`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
