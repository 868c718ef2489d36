use dioxus::prelude::*;
use shared_types::{AuthUser, LoginResponse};

use crate::storage::KeyValueStore;

pub const ACCESS_TOKEN_KEY: &str = "acadix.access_token";
pub const REFRESH_TOKEN_KEY: &str = "acadix.refresh_token";
pub const USER_KEY: &str = "acadix.user";

/// An authenticated session: the backend token pair plus the user record.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}

/// Global authentication state, provided once above the router so a login
/// resolving after a route change still lands in the same place.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    pub current: Signal<Option<Session>>,
}

impl SessionState {
    /// Restore from storage. Presence of the token pair is the sole signal;
    /// a malformed stored user discards the whole session.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        Self {
            current: Signal::new(read_session(store)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.current.read().as_ref().map(|s| s.user.clone())
    }

    pub fn access_token(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.access_token.clone())
    }

    /// Persist a fresh login and flip to authenticated.
    pub fn establish(&mut self, response: LoginResponse, store: &impl KeyValueStore) {
        let session = Session {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            user: response.user,
        };
        persist_session(store, &session);
        self.current.set(Some(session));
    }

    /// Drop the local session unconditionally — callers invoke this even
    /// when the remote logout call failed.
    pub fn clear(&mut self, store: &impl KeyValueStore) {
        clear_session(store);
        self.current.set(None);
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

pub fn read_session(store: &impl KeyValueStore) -> Option<Session> {
    let access_token = store.get(ACCESS_TOKEN_KEY)?;
    let refresh_token = store.get(REFRESH_TOKEN_KEY)?;
    let raw_user = store.get(USER_KEY)?;

    match serde_json::from_str::<AuthUser>(&raw_user) {
        Ok(user) => Some(Session {
            access_token,
            refresh_token,
            user,
        }),
        Err(err) => {
            tracing::warn!("discarding stored session with malformed user record: {err}");
            clear_session(store);
            None
        }
    }
}

pub fn persist_session(store: &impl KeyValueStore, session: &Session) {
    store.set(ACCESS_TOKEN_KEY, &session.access_token);
    store.set(REFRESH_TOKEN_KEY, &session.refresh_token);
    match serde_json::to_string(&session.user) {
        Ok(json) => store.set(USER_KEY, &json),
        Err(err) => tracing::warn!("failed to serialize user for storage: {err}"),
    }
}

pub fn clear_session(store: &impl KeyValueStore) {
    store.remove(ACCESS_TOKEN_KEY);
    store.remove(REFRESH_TOKEN_KEY);
    store.remove(USER_KEY);
}
