//! Client-side session: the cached token and user, kept together.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::user::{LoginResponse, User};
use crate::AuthError;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// String key/value persistence behind a [`Session`].
pub trait SessionStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and native hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// Explicit session context passed to whatever needs the login state.
#[derive(Debug, Clone, Default)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn token(&self) -> Option<String> {
        self.store.load(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Cached user; an unreadable entry counts as absent.
    pub fn user(&self) -> Option<User> {
        let raw = self.store.load(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "cached user unreadable");
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Persist token and user after a successful login.
    pub fn begin(&mut self, login: &LoginResponse) {
        self.store.save(TOKEN_KEY, &login.token);
        self.write_user(&login.user);
        info!(user = %login.user.username, "session started");
    }

    /// Drop token and user together.
    pub fn end(&mut self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        info!("session ended");
    }

    /// Refresh the cached user after a profile update.
    pub fn replace_user(&mut self, user: &User) {
        self.write_user(user);
        debug!(user = %user.username, "cached user replaced");
    }

    /// React to a failed request. Returns `true` when the session was
    /// cleared and the caller should send the user to the login page.
    pub fn apply_error(&mut self, err: &AuthError) -> bool {
        if !err.is_unauthorized() {
            return false;
        }
        warn!("backend answered 401, clearing session");
        self.end();
        true
    }

    fn write_user(&mut self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.save(USER_KEY, &json),
            Err(e) => warn!(error = %e, "could not serialize user"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login() -> LoginResponse {
        LoginResponse {
            token: "abc".into(),
            user: User {
                id: 1,
                username: "ada".into(),
                email: "ada@example.com".into(),
                created_at: "2024-03-09".into(),
            },
        }
    }

    #[test]
    fn test_begin_and_end() {
        let mut session = Session::new(MemoryStore::new());
        assert!(!session.is_logged_in());
        session.begin(&login());
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.user().unwrap().username, "ada");

        session.end();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_cleared_on_401_only() {
        let mut session = Session::new(MemoryStore::new());
        session.begin(&login());

        let rejected = AuthError::Rejected {
            status: 500,
            message: "boom".into(),
        };
        assert!(!session.apply_error(&rejected));
        assert!(!session.apply_error(&AuthError::Network("offline".into())));
        assert!(session.is_logged_in());

        assert!(session.apply_error(&AuthError::Unauthorized("expired".into())));
        assert!(!session.is_logged_in());
        assert!(session.store().load(USER_KEY).is_none());
    }

    #[test]
    fn test_replace_user() {
        let mut session = Session::new(MemoryStore::new());
        session.begin(&login());
        let mut user = session.user().unwrap();
        user.email = "new@example.com".into();
        session.replace_user(&user);
        assert_eq!(session.user().unwrap().email, "new@example.com");
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_corrupt_user_entry() {
        let mut store = MemoryStore::new();
        store.save(USER_KEY, "{not json");
        store.save(TOKEN_KEY, "");
        let session = Session::new(store);
        assert!(session.user().is_none());
        assert!(!session.is_logged_in());
    }
}
