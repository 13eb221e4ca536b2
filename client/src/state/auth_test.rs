use futures::channel::oneshot;
use futures::executor::block_on;
use leptos::prelude::WithUntracked;

use super::*;
use crate::util::storage::MemoryStorage;

fn memory() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

fn store_over(storage: &Arc<MemoryStorage>) -> SessionStore {
    SessionStore::restore(storage.clone())
}

#[derive(Debug)]
struct RejectAll;

impl CredentialVerifier for RejectAll {
    fn verify(&self, _email: &str, _password: &str, _role: Role) -> Result<User, AuthError> {
        Err(AuthError::InvalidCredentials)
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_flag_follows_user() {
    let session = Session::signed_out();
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());

    let session = Session::signed_in(mock::demo_user(Role::Parent, "p@example.com"));
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Parent));
}

// =============================================================
// login
// =============================================================

#[test]
fn login_yields_requested_role_for_every_role() {
    for role in Role::ALL {
        let mut store = SessionStore::new(memory());
        let user = store.login("anyone@example.com", "anything", role).unwrap();
        assert_eq!(user.role, role);
        assert!(store.is_authenticated());
        assert_eq!(store.current_user(), Some(&user));
    }
}

#[test]
fn login_echoes_email_into_fixed_identity() {
    let mut store = SessionStore::new(memory());
    let user = store.login("sarah@school.test", "", Role::Teacher).unwrap();
    assert_eq!(user.id, "teacher-1");
    assert_eq!(user.name, "Sarah Davis");
    assert_eq!(user.email, "sarah@school.test");
    assert_eq!(
        user.avatar.as_deref(),
        Some("https://api.dicebear.com/7.x/avataaars/svg?seed=teacher1")
    );
}

#[test]
fn login_replaces_previous_user() {
    let mut store = SessionStore::new(memory());
    store.login("a@example.com", "x", Role::Student).unwrap();
    store.login("b@example.com", "x", Role::Admin).unwrap();
    assert_eq!(store.session().role(), Some(Role::Admin));
}

#[test]
fn rejected_login_leaves_session_unchanged() {
    let storage = memory();
    let mut store = store_over(&storage);
    store.login("a@example.com", "x", Role::Student).unwrap();
    let before = store.session().clone();
    let persisted_before = storage.load(SESSION_STORAGE_KEY);

    let mut store = store.with_verifier(Arc::new(RejectAll));
    assert_eq!(store.login("a@example.com", "wrong", Role::Admin), Err(AuthError::InvalidCredentials));
    assert_eq!(store.session(), &before);
    assert_eq!(storage.load(SESSION_STORAGE_KEY), persisted_before);
    assert!(!store.is_login_pending());
}

#[test]
fn second_login_while_pending_is_rejected() {
    let mut store = SessionStore::new(memory());
    store.begin_login().unwrap();
    assert!(store.is_login_pending());
    assert_eq!(store.begin_login(), Err(AuthError::LoginInProgress));
    assert_eq!(store.login("a@example.com", "x", Role::Student), Err(AuthError::LoginInProgress));
    assert!(!store.is_authenticated());

    store.finish_login("a@example.com", "x", Role::Student).unwrap();
    assert!(!store.is_login_pending());
    assert!(store.begin_login().is_ok());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_user_from_any_state() {
    let mut store = SessionStore::new(memory());
    store.logout();
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());

    store.login("a@example.com", "x", Role::Admin).unwrap();
    store.logout();
    store.logout();
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn reload_restores_logged_in_user() {
    let storage = memory();
    let mut store = store_over(&storage);
    let user = store.login("admin@example.com", "x", Role::Admin).unwrap();

    let reloaded = store_over(&storage);
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.current_user(), Some(&user));
}

#[test]
fn reload_after_logout_is_signed_out() {
    let storage = memory();
    let mut store = store_over(&storage);
    store.login("a@example.com", "x", Role::Student).unwrap();
    store.logout();
    assert!(!store_over(&storage).is_authenticated());
}

#[test]
fn persisted_layout_matches_envelope() {
    let storage = memory();
    let mut store = store_over(&storage);
    store.login("p@example.com", "x", Role::Parent).unwrap();

    let raw = storage.load(SESSION_STORAGE_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["version"], 0);
    assert_eq!(json["state"]["isAuthenticated"], true);
    assert_eq!(json["state"]["user"]["id"], "parent-1");
    assert_eq!(json["state"]["user"]["role"], "parent");
}

#[test]
fn corrupt_slot_restores_signed_out_and_is_cleared() {
    let storage = Arc::new(MemoryStorage::with_slot(SESSION_STORAGE_KEY, "{not json"));
    let store = store_over(&storage);
    assert!(!store.is_authenticated());
    assert_eq!(storage.load(SESSION_STORAGE_KEY), None);
}

#[test]
fn inconsistent_snapshot_is_normalized() {
    let raw = r#"{"state":{"user":null,"isAuthenticated":true},"version":0}"#;
    assert_eq!(decode_session(raw), Ok(Session::signed_out()));

    let raw = r#"{"state":{"user":{"id":"admin-1","email":"a@b.c","name":"Admin User","role":"admin"},"isAuthenticated":false}}"#;
    assert_eq!(decode_session(raw), Ok(Session::signed_out()));
}

#[test]
fn decode_reports_restore_failure() {
    assert!(matches!(decode_session("[]"), Err(AuthError::SessionRestore(_))));
}

#[test]
fn clear_storage_resets_session_and_slot() {
    let storage = memory();
    let mut store = store_over(&storage);
    store.login("a@example.com", "x", Role::Teacher).unwrap();
    store.clear_storage();
    assert!(!store.is_authenticated());
    assert_eq!(storage.load(SESSION_STORAGE_KEY), None);
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_starts_loading_until_restored() {
    let storage = memory();
    SessionStore::new(storage.clone()).login("a@example.com", "x", Role::Admin).unwrap();

    let mut state = AuthState::new(SessionStore::new(storage));
    assert!(state.loading);
    assert!(state.is_busy());
    assert!(!state.is_authenticated());

    state.restore();
    assert!(!state.loading);
    assert_eq!(state.user().map(|u| u.role), Some(Role::Admin));
}

#[test]
fn auth_state_records_login_error() {
    let store = SessionStore::new(memory()).with_verifier(Arc::new(RejectAll));
    let mut state = AuthState::new(store);
    state.restore();
    state.begin_login().unwrap();
    assert!(state.is_busy());
    assert!(state.finish_login("a@example.com", "bad", Role::Student).is_err());
    assert_eq!(state.error.as_deref(), Some("Invalid credentials. Please try again."));
    assert!(!state.is_busy());

    state.begin_login().unwrap();
    assert!(state.error.is_none());
}

#[test]
fn post_login_target_prefers_permitted_return_path() {
    let mut state = AuthState::new(SessionStore::new(memory()));
    state.remember_return_path("/attendance");
    let teacher = mock::demo_user(Role::Teacher, "t@example.com");
    assert_eq!(state.take_post_login_target(&teacher), "/attendance");
    assert_eq!(state.return_to, None);
}

#[test]
fn post_login_target_falls_back_to_own_dashboard() {
    let mut state = AuthState::new(SessionStore::new(memory()));
    state.remember_return_path("/attendance");
    let student = mock::demo_user(Role::Student, "s@example.com");
    assert_eq!(state.take_post_login_target(&student), "/dashboard/student");

    assert_eq!(state.take_post_login_target(&student), "/dashboard/student");
}

#[test]
fn login_path_is_never_remembered() {
    let mut state = AuthState::new(SessionStore::new(memory()));
    state.remember_return_path("/");
    assert_eq!(state.return_to, None);
}

#[test]
fn logout_forgets_return_path_and_error() {
    let mut state = AuthState::new(SessionStore::new(memory()));
    state.restore();
    state.error = Some("old".to_owned());
    state.remember_return_path("/grades");
    state.logout();
    assert_eq!(state.return_to, None);
    assert_eq!(state.error, None);
}

// =============================================================
// login_async
// =============================================================

fn shared_state(store: SessionStore) -> RwSignal<AuthState> {
    let mut state = AuthState::new(store);
    state.restore();
    RwSignal::new(state)
}

#[test]
fn login_async_signs_in_and_releases_slot() {
    let auth = shared_state(SessionStore::new(memory()));
    let user = block_on(AuthState::login_async(auth, "t@example.com".into(), "pw".into(), Role::Teacher)).unwrap();
    assert_eq!(user.role, Role::Teacher);
    auth.with_untracked(|a| {
        assert!(a.is_authenticated());
        assert!(!a.is_busy());
        assert!(a.error.is_none());
    });
}

#[test]
fn login_async_records_rejection_and_releases_slot() {
    let auth = shared_state(SessionStore::new(memory()).with_verifier(Arc::new(RejectAll)));
    let outcome = block_on(AuthState::login_async(auth, "a@example.com".into(), "bad".into(), Role::Parent));
    assert_eq!(outcome, Err(AuthError::InvalidCredentials));
    auth.with_untracked(|a| {
        assert!(!a.is_authenticated());
        assert!(!a.is_busy());
        assert_eq!(a.error.as_deref(), Some("Invalid credentials. Please try again."));
    });
}

#[test]
fn second_login_during_round_trip_is_refused() {
    let auth = shared_state(SessionStore::new(memory()));
    let (release, wait) = oneshot::channel::<()>();
    block_on(async move {
        let round_trip = async move {
            let _ = wait.await;
        };
        let mut first =
            Box::pin(AuthState::login_with_delay(auth, "first@example.com".into(), "pw".into(), Role::Student, round_trip));
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(auth.with_untracked(AuthState::is_busy));

        let second = AuthState::login_async(auth, "second@example.com".into(), "pw".into(), Role::Admin).await;
        assert_eq!(second, Err(AuthError::LoginInProgress));

        release.send(()).unwrap();
        let user = first.await.unwrap();
        assert_eq!(user.email, "first@example.com");
        assert_eq!(user.role, Role::Student);
        assert!(!auth.with_untracked(AuthState::is_busy));
    });
}
