// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session store — the authenticated-user state machine.
//
// Holds the signed-in user, restores it from key-value storage at startup,
// and exposes sign-in/sign-up/sign-out. Sign-up deliberately does not
// authenticate: the backend registers the account and the user signs in
// explicitly afterwards. Storage failures never escape this component; they
// become a retrievable error message or a signed-out state.

use std::sync::Arc;

use async_trait::async_trait;
use cahier_bridge::traits::NativeKeyValueStorage;
use cahier_core::error::Result;
use cahier_core::types::User;
use tracing::{info, instrument, warn};

/// Storage key holding the serialized session user.
pub const SESSION_KEY: &str = "user";

/// External registration call, performed by the real auth service.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Register a new account. Success does not create a session.
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<()>;
}

/// Authentication lifecycle states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Session not yet loaded from storage.
    Unknown,
    /// A transition (startup restore or registration) is in flight.
    Loading,
    Authenticated(User),
    Unauthenticated,
}

impl AuthState {
    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Component owning the authenticated-user state machine.
///
/// Constructed explicitly at application start with its storage and auth
/// backend injected; nothing here is global.
pub struct SessionStore {
    storage: Arc<dyn NativeKeyValueStorage>,
    backend: Arc<dyn AuthBackend>,
    state: AuthState,
    error: Option<String>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn NativeKeyValueStorage>, backend: Arc<dyn AuthBackend>) -> Self {
        Self {
            storage,
            backend,
            state: AuthState::Unknown,
            error: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Last user-facing error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Restore the persisted session.
    ///
    /// Absent, unreadable, or malformed records all resolve to
    /// `Unauthenticated` — never an error.
    #[instrument(skip_all)]
    pub fn load(&mut self) -> &AuthState {
        self.state = AuthState::Loading;
        self.state = match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(email = %user.email, "session restored");
                    AuthState::Authenticated(user)
                }
                Err(e) => {
                    warn!(error = %e, "persisted session malformed — treating as signed out");
                    AuthState::Unauthenticated
                }
            },
            Ok(None) => AuthState::Unauthenticated,
            Err(e) => {
                warn!(error = %e, "session storage unreadable — treating as signed out");
                AuthState::Unauthenticated
            }
        };
        &self.state
    }

    /// Accept an externally validated identity and persist it.
    ///
    /// Pure state acceptance — no validation happens here. On a storage
    /// failure the error message is set and the state is left unchanged.
    #[instrument(skip_all, fields(email = %user.email))]
    pub fn sign_in(&mut self, user: User) {
        self.error = None;

        let raw = match serde_json::to_string(&user) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "could not serialize session user");
                self.error = Some("Failed to sign in. Please try again.".into());
                return;
            }
        };

        match self.storage.set(SESSION_KEY, &raw) {
            Ok(()) => {
                info!("signed in");
                self.state = AuthState::Authenticated(user);
            }
            Err(e) => {
                warn!(error = %e, "could not persist session");
                self.error = Some("Failed to sign in. Please try again.".into());
            }
        }
    }

    /// Register a new account through the auth backend.
    ///
    /// Transitions through `Loading` and restores the prior state afterwards
    /// whether or not registration succeeded: a freshly registered user must
    /// still sign in explicitly.
    #[instrument(skip_all, fields(%email))]
    pub async fn sign_up(&mut self, name: &str, email: &str, password: &str) {
        let prior = std::mem::replace(&mut self.state, AuthState::Loading);
        self.error = None;

        if let Err(e) = self.backend.register(name, email, password).await {
            warn!(error = %e, "registration failed");
            self.error = Some("Failed to sign up. Please try again.".into());
        } else {
            info!("registration accepted — awaiting explicit sign-in");
        }

        self.state = prior;
    }

    /// Clear the persisted record and drop the session.
    ///
    /// The transition to `Unauthenticated` happens even when the removal
    /// fails; the failure only surfaces as the retrievable error message.
    #[instrument(skip_all)]
    pub fn sign_out(&mut self) {
        self.error = None;

        if let Err(e) = self.storage.remove(SESSION_KEY) {
            warn!(error = %e, "could not clear persisted session");
            self.error = Some("Failed to fully clear the stored session.".into());
        }

        info!("signed out");
        self.state = AuthState::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cahier_core::error::CahierError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory key-value storage double.
    #[derive(Default)]
    struct MemoryStorage {
        records: Mutex<HashMap<String, String>>,
    }

    impl NativeKeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.records.lock().expect("lock").get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.records
                .lock()
                .expect("lock")
                .insert(key.into(), value.into());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.records.lock().expect("lock").remove(key);
            Ok(())
        }
    }

    /// Auth backend double with a switchable outcome.
    struct FakeBackend {
        accept: bool,
    }

    #[async_trait]
    impl AuthBackend for FakeBackend {
        async fn register(&self, _name: &str, _email: &str, _password: &str) -> Result<()> {
            if self.accept {
                Ok(())
            } else {
                Err(CahierError::Registration("email already taken".into()))
            }
        }
    }

    fn store_with(storage: Arc<MemoryStorage>, accept: bool) -> SessionStore {
        SessionStore::new(storage, Arc::new(FakeBackend { accept }))
    }

    fn test_user() -> User {
        User {
            id: "1".into(),
            email: "a@b.com".into(),
            name: "A".into(),
        }
    }

    #[test]
    fn no_persisted_session_resolves_to_unauthenticated() {
        let mut store = store_with(Arc::new(MemoryStorage::default()), true);
        assert_eq!(*store.state(), AuthState::Unknown);
        store.load();
        assert_eq!(*store.state(), AuthState::Unauthenticated);
    }

    #[test]
    fn sign_in_persists_and_reload_reproduces_the_user() {
        let storage = Arc::new(MemoryStorage::default());

        let mut store = store_with(Arc::clone(&storage), true);
        store.load();
        store.sign_in(test_user());
        assert_eq!(*store.state(), AuthState::Authenticated(test_user()));
        assert!(store.error().is_none());

        // A fresh store over the same storage restores the same user.
        let mut reloaded = store_with(storage, true);
        reloaded.load();
        assert_eq!(*reloaded.state(), AuthState::Authenticated(test_user()));
    }

    #[test]
    fn sign_out_removes_the_record() {
        let storage = Arc::new(MemoryStorage::default());

        let mut store = store_with(Arc::clone(&storage), true);
        store.load();
        store.sign_in(test_user());
        store.sign_out();
        assert_eq!(*store.state(), AuthState::Unauthenticated);

        let mut reloaded = store_with(storage, true);
        reloaded.load();
        assert_eq!(*reloaded.state(), AuthState::Unauthenticated);
    }

    #[test]
    fn malformed_persisted_record_is_treated_as_signed_out() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set(SESSION_KEY, "{not json").expect("seed");

        let mut store = store_with(storage, true);
        store.load();
        assert_eq!(*store.state(), AuthState::Unauthenticated);
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn sign_up_success_does_not_authenticate() {
        let mut store = store_with(Arc::new(MemoryStorage::default()), true);
        store.load();

        store.sign_up("A", "a@b.com", "secret").await;
        assert_eq!(*store.state(), AuthState::Unauthenticated);
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn sign_up_failure_sets_error_and_restores_prior_state() {
        let mut store = store_with(Arc::new(MemoryStorage::default()), false);
        store.load();
        store.sign_in(test_user());

        store.sign_up("B", "b@c.com", "secret").await;
        assert_eq!(*store.state(), AuthState::Authenticated(test_user()));
        assert_eq!(
            store.error(),
            Some("Failed to sign up. Please try again.")
        );
    }

    #[test]
    fn failing_storage_keeps_sign_in_state_unchanged() {
        /// Storage double whose writes always fail.
        struct BrokenStorage;

        impl NativeKeyValueStorage for BrokenStorage {
            fn get(&self, _key: &str) -> Result<Option<String>> {
                Ok(None)
            }
            fn set(&self, _key: &str, _value: &str) -> Result<()> {
                Err(CahierError::SessionStorage("disk full".into()))
            }
            fn remove(&self, _key: &str) -> Result<()> {
                Ok(())
            }
        }

        let mut store = SessionStore::new(
            Arc::new(BrokenStorage),
            Arc::new(FakeBackend { accept: true }),
        );
        store.load();
        store.sign_in(test_user());

        assert_eq!(*store.state(), AuthState::Unauthenticated);
        assert_eq!(store.error(), Some("Failed to sign in. Please try again."));
    }
}
