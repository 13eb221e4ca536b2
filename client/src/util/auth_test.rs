use super::*;
use crate::net::mock::demo_user;

fn signed_in(role: Role) -> Session {
    Session::signed_in(demo_user(role, "someone@example.com"))
}

// =============================================================
// Loading
// =============================================================

#[test]
fn loading_defers_every_decision() {
    assert_eq!(decide(true, &Session::signed_out(), &[], "/calendar"), GuardDecision::Loading);
    assert_eq!(decide(true, &signed_in(Role::Admin), &[Role::Student], "/courses"), GuardDecision::Loading);
    assert_eq!(GuardDecision::Loading.redirect_target(), None);
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn signed_out_always_redirects_to_login() {
    let allow_lists: [&[Role]; 4] = [&[], &Role::ALL, &[Role::Admin], &[Role::Teacher, Role::Admin]];
    for allowed in allow_lists {
        let decision = decide(false, &Session::signed_out(), allowed, "/attendance");
        assert_eq!(decision, GuardDecision::RedirectToLogin { from: "/attendance".to_owned() });
        assert_eq!(decision.redirect_target().as_deref(), Some("/"));
    }
}

// =============================================================
// Role mismatch
// =============================================================

#[test]
fn role_outside_allow_list_redirects_to_own_dashboard() {
    for role in Role::ALL {
        for allowed_role in Role::ALL.into_iter().filter(|r| *r != role) {
            let decision = decide(false, &signed_in(role), &[allowed_role], "/somewhere");
            assert_eq!(decision, GuardDecision::RedirectToOwnDashboard(role));
            assert_eq!(decision.redirect_target(), Some(role.dashboard_path()));
        }
    }
}

#[test]
fn teacher_on_admin_page_lands_on_teacher_dashboard() {
    let decision = decide(false, &signed_in(Role::Teacher), &[Role::Admin], "/students");
    assert_eq!(decision.redirect_target().as_deref(), Some("/dashboard/teacher"));
}

// =============================================================
// Render
// =============================================================

#[test]
fn empty_allow_list_admits_every_role() {
    for role in Role::ALL {
        assert_eq!(decide(false, &signed_in(role), &[], "/calendar"), GuardDecision::Render);
        assert_eq!(decide(false, &signed_in(role), &Role::ALL, "/calendar"), GuardDecision::Render);
    }
}

#[test]
fn listed_role_renders() {
    let decision = decide(false, &signed_in(Role::Admin), &[Role::Teacher, Role::Admin], "/attendance");
    assert_eq!(decision, GuardDecision::Render);
    assert_eq!(decision.redirect_target(), None);
}

#[test]
fn decide_for_reads_auth_state() {
    let mut state = AuthState::new(crate::state::auth::SessionStore::new(std::sync::Arc::new(
        crate::util::storage::MemoryStorage::new(),
    )));
    assert_eq!(decide_for(&state, &[], "/grades"), GuardDecision::Loading);
    state.restore();
    assert_eq!(
        decide_for(&state, &[], "/grades"),
        GuardDecision::RedirectToLogin { from: "/grades".to_owned() }
    );
}
