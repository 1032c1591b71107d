use contracts::system::auth::{Admin, Session, SessionStore};
use leptos::prelude::*;
use std::sync::Arc;

use super::storage::LocalStorageSessionStore;

/// Current session plus the store it is persisted in.
///
/// The store is written only here: on login, on logout and when the API
/// rejects the token.
#[derive(Clone)]
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    store: Arc<dyn SessionStore + Send + Sync>,
}

impl AuthContext {
    pub fn new(store: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self {
            session: RwSignal::new(store.get_session()),
            store,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn admin(&self) -> Option<Admin> {
        self.session.with(|s| s.as_ref().map(|s| s.admin.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn sign_in(&self, session: Session) {
        log::info!("signed in as {}", session.admin.username);
        self.store.set_session(&session);
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        self.store.clear_session();
        self.session.set(None);
    }
}

/// Provides [`AuthContext`] backed by localStorage.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::new(Arc::new(LocalStorageSessionStore)));
    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
