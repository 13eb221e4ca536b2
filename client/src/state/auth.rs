//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single source of truth for who is signed in. It is
//! created once by the root component, rehydrated from the `edusmart-auth`
//! storage slot, and handed to views through Leptos context inside
//! `AuthState`. Only `login`/`logout` mutate the session.
//!
//! INVARIANTS
//! ==========
//! - `is_authenticated() == current_user().is_some()` at all times; the flag
//!   is derived, never stored separately in memory.
//! - Every mutation is written through to storage before returning.
//! - At most one login attempt is in flight per store.
//!
//! ERROR HANDLING
//! ==============
//! A corrupt storage slot is logged, cleared, and treated as "signed out".
//! Credential rejection leaves the session untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use leptos::prelude::{RwSignal, Update};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{LOGIN_LATENCY_MS, SESSION_SNAPSHOT_VERSION, SESSION_STORAGE_KEY};
use crate::net::mock;
use crate::net::types::{Role, User};
use crate::routes;
use crate::util::storage::{BrowserStorage, SessionStorage};

/// Failures surfaced by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
    #[error("A sign-in attempt is already in progress.")]
    LoginInProgress,
    #[error("stored session could not be restored: {0}")]
    SessionRestore(String),
}

/// Checks a credential triple and produces the matching account.
pub trait CredentialVerifier: Send + Sync + fmt::Debug {
    /// Return the account for these credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the credentials are rejected.
    fn verify(&self, email: &str, password: &str, role: Role) -> Result<User, AuthError>;
}

/// Demo-mode verifier: accepts any email/password and signs in as the fixed
/// identity for the chosen role.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoVerifier;

impl CredentialVerifier for DemoVerifier {
    fn verify(&self, email: &str, _password: &str, role: Role) -> Result<User, AuthError> {
        Ok(mock::demo_user(role, email))
    }
}

/// Who is signed in, if anyone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// On-disk envelope: `{"state":{"user":..,"isAuthenticated":..},"version":0}`.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    state: SessionSnapshot,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionSnapshot {
    user: Option<User>,
    #[serde(default)]
    is_authenticated: bool,
}

/// Serialize `session` into the persisted slot layout.
///
/// # Errors
///
/// Returns the serializer error; not expected for well-formed users.
pub fn encode_session(session: &Session) -> Result<String, serde_json::Error> {
    serde_json::to_string(&PersistedSession {
        state: SessionSnapshot {
            user: session.user.clone(),
            is_authenticated: session.is_authenticated(),
        },
        version: SESSION_SNAPSHOT_VERSION,
    })
}

/// Parse a persisted slot. A snapshot whose flag disagrees with its user is
/// normalized to signed-out.
///
/// # Errors
///
/// Returns [`AuthError::SessionRestore`] when `raw` is not a valid snapshot.
pub fn decode_session(raw: &str) -> Result<Session, AuthError> {
    let persisted: PersistedSession =
        serde_json::from_str(raw).map_err(|e| AuthError::SessionRestore(e.to_string()))?;
    match persisted.state {
        SessionSnapshot { user: Some(user), is_authenticated: true } => Ok(Session::signed_in(user)),
        _ => Ok(Session::signed_out()),
    }
}

/// Owns the session and writes it through to a storage slot.
#[derive(Clone, Debug)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    verifier: Arc<dyn CredentialVerifier>,
    session: Session,
    login_pending: bool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }
}

impl SessionStore {
    /// Empty store over `storage`, using the demo verifier. Does not read storage.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            verifier: Arc::new(DemoVerifier),
            session: Session::signed_out(),
            login_pending: false,
        }
    }

    /// Replace the credential verifier.
    #[must_use]
    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Store over `storage`, rehydrated from its persisted slot.
    pub fn restore(storage: Arc<dyn SessionStorage>) -> Self {
        let mut store = Self::new(storage);
        store.reload();
        store
    }

    /// Re-read the persisted slot. Unreadable state is cleared and treated as
    /// signed-out.
    pub fn reload(&mut self) {
        match self.read_persisted() {
            Ok(session) => self.session = session,
            Err(err) => {
                log::warn!("discarding persisted session: {err}");
                self.storage.remove(SESSION_STORAGE_KEY);
                self.session = Session::signed_out();
            }
        }
    }

    fn read_persisted(&self) -> Result<Session, AuthError> {
        match self.storage.load(SESSION_STORAGE_KEY) {
            Some(raw) => decode_session(&raw),
            None => Ok(Session::signed_out()),
        }
    }

    /// Verify credentials and sign in.
    ///
    /// # Errors
    ///
    /// [`AuthError::LoginInProgress`] if another attempt has not finished;
    /// [`AuthError::InvalidCredentials`] if the verifier rejects the triple.
    pub fn login(&mut self, email: &str, password: &str, role: Role) -> Result<User, AuthError> {
        self.begin_login()?;
        self.finish_login(email, password, role)
    }

    /// Claim the single login slot before an async round trip.
    ///
    /// # Errors
    ///
    /// [`AuthError::LoginInProgress`] if the slot is already claimed.
    pub fn begin_login(&mut self) -> Result<(), AuthError> {
        if self.login_pending {
            return Err(AuthError::LoginInProgress);
        }
        self.login_pending = true;
        Ok(())
    }

    /// Complete a login claimed by [`Self::begin_login`]. Always releases the
    /// slot, whatever the outcome.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] if the verifier rejects the triple.
    pub fn finish_login(&mut self, email: &str, password: &str, role: Role) -> Result<User, AuthError> {
        self.login_pending = false;
        let user = self.verifier.verify(email, password, role)?;
        self.session = Session::signed_in(user.clone());
        self.persist();
        log::info!("signed in as {} ({})", user.id, user.role);
        Ok(user)
    }

    /// Sign out. Safe to call when already signed out.
    pub fn logout(&mut self) {
        self.session = Session::signed_out();
        self.persist();
    }

    /// Drop the persisted slot entirely and reset to signed-out.
    pub fn clear_storage(&mut self) {
        self.storage.remove(SESSION_STORAGE_KEY);
        self.session = Session::signed_out();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_login_pending(&self) -> bool {
        self.login_pending
    }

    fn persist(&self) {
        match encode_session(&self.session) {
            Ok(raw) => self.storage.save(SESSION_STORAGE_KEY, &raw),
            Err(err) => log::warn!("session not persisted: {err}"),
        }
    }
}

/// Auth context value shared through `RwSignal<AuthState>`.
///
/// `loading` stays `true` from construction until [`AuthState::restore`]
/// runs in the browser, so guards hold off on redirect decisions until then.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub store: SessionStore,
    pub loading: bool,
    /// User-visible message from the last failed login.
    pub error: Option<String>,
    /// Path an unauthenticated visitor originally asked for.
    pub return_to: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new(SessionStore::default())
    }
}

impl AuthState {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            loading: true,
            error: None,
            return_to: None,
        }
    }

    /// Rehydrate from storage and end the loading phase.
    pub fn restore(&mut self) {
        self.store.reload();
        self.loading = false;
    }

    pub fn user(&self) -> Option<&User> {
        self.store.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// True while restoring or while a login is in flight.
    pub fn is_busy(&self) -> bool {
        self.loading || self.store.is_login_pending()
    }

    /// Start a login attempt and clear any previous error.
    ///
    /// # Errors
    ///
    /// [`AuthError::LoginInProgress`] if an attempt is already in flight.
    pub fn begin_login(&mut self) -> Result<(), AuthError> {
        self.store.begin_login()?;
        self.error = None;
        Ok(())
    }

    /// Finish a login attempt, recording a user-visible error on failure.
    ///
    /// # Errors
    ///
    /// Propagates the store's verification error.
    pub fn finish_login(&mut self, email: &str, password: &str, role: Role) -> Result<User, AuthError> {
        match self.store.finish_login(email, password, role) {
            Ok(user) => {
                self.error = None;
                Ok(user)
            }
            Err(err) => {
                log::warn!("login rejected for role {role}: {err}");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn logout(&mut self) {
        self.store.logout();
        self.error = None;
        self.return_to = None;
    }

    /// Remember where an unauthenticated visitor was headed.
    pub fn remember_return_path(&mut self, path: &str) {
        if path != crate::config::LOGIN_PATH {
            self.return_to = Some(path.to_owned());
        }
    }

    /// Where to go after `user` signs in: the remembered path when their role
    /// may open it, otherwise their own dashboard. Consumes the remembered path.
    pub fn take_post_login_target(&mut self, user: &User) -> String {
        match self.return_to.take() {
            Some(path) if routes::permits(&path, user.role) => path,
            _ => user.role.dashboard_path(),
        }
    }
}

impl AuthState {
    /// Sign in through the shared signal: claim the login slot, wait out the
    /// simulated round trip, then verify. The signal reads as busy in between.
    ///
    /// # Errors
    ///
    /// [`AuthError::LoginInProgress`] if another attempt holds the slot, or the
    /// verifier's rejection.
    pub async fn login_async(
        auth: RwSignal<AuthState>,
        email: String,
        password: String,
        role: Role,
    ) -> Result<User, AuthError> {
        let delay = crate::net::api::simulated_latency(LOGIN_LATENCY_MS);
        Self::login_with_delay(auth, email, password, role, delay).await
    }

    /// [`AuthState::login_async`] with the round trip supplied by the caller.
    ///
    /// # Errors
    ///
    /// Same as [`AuthState::login_async`].
    pub async fn login_with_delay(
        auth: RwSignal<AuthState>,
        email: String,
        password: String,
        role: Role,
        delay: impl Future<Output = ()>,
    ) -> Result<User, AuthError> {
        let mut claimed = Err(AuthError::LoginInProgress);
        auth.update(|a| claimed = a.begin_login());
        claimed?;

        delay.await;

        let mut outcome = Err(AuthError::LoginInProgress);
        auth.update(|a| outcome = a.finish_login(&email, &password, role));
        outcome
    }
}
