use std::sync::Arc;

use dioxus::prelude::*;
use planner_core::model::{SessionState, SessionStatus, UserIdentity};
use services::SessionStore;

/// Read-only mirror of the `SessionStore` for rendering.
///
/// Views never write session state themselves; after any store operation they
/// call `sync` so the guard and headers re-render.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    state: Signal<SessionState>,
}

impl SessionHandle {
    /// Must be called inside a component scope.
    #[must_use]
    pub fn new(initial: SessionState) -> Self {
        Self {
            state: Signal::new(initial),
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.state.read().status()
    }

    #[must_use]
    pub fn identity(&self) -> Option<UserIdentity> {
        self.state
            .read()
            .session()
            .map(|session| session.identity().clone())
    }

    pub fn sync(&self, store: &SessionStore) {
        let mut state = self.state;
        state.set(store.snapshot());
    }
}

/// Provide the session mirror for the subtree and resolve the persisted session once.
pub fn use_session_root(store: Arc<SessionStore>) -> SessionHandle {
    let initial = store.snapshot();
    let handle = use_context_provider(move || SessionHandle::new(initial));

    use_future(move || {
        let store = Arc::clone(&store);
        async move {
            // Failures are logged by the store and already resolve to anonymous.
            let _ = store.restore().await;
            handle.sync(&store);
        }
    });

    handle
}

#[must_use]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}
