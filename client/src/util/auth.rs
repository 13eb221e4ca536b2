//! Route guard decision and its reactive installer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected view runs the same decision table so unauthenticated and
//! under-privileged navigation is corrected identically everywhere. The table
//! is a pure function; `install_route_guard` only wires it to navigation.
//!
//! DECISION TABLE
//! ==============
//! loading                         -> Loading (no redirect yet)
//! signed out                      -> RedirectToLogin { from: requested path }
//! role not in non-empty allow-list -> RedirectToOwnDashboard(role)
//! otherwise                       -> Render
//!
//! A role mismatch is silently corrected by redirect, never reported.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_PATH;
use crate::net::types::Role;
use crate::state::auth::{AuthState, Session};

/// Outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still in flight; show a neutral placeholder.
    Loading,
    /// Show the requested view.
    Render,
    /// Send the visitor to the public entry path.
    RedirectToLogin { from: String },
    /// Send the user to their own dashboard.
    RedirectToOwnDashboard(Role),
}

impl GuardDecision {
    /// Path to navigate to, if this decision redirects.
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            GuardDecision::RedirectToLogin { .. } => Some(LOGIN_PATH.to_owned()),
            GuardDecision::RedirectToOwnDashboard(role) => Some(role.dashboard_path()),
            GuardDecision::Loading | GuardDecision::Render => None,
        }
    }
}

/// Decide what to do with a navigation to `requested_path`.
///
/// An empty `allowed` list admits any signed-in role.
pub fn decide(loading: bool, session: &Session, allowed: &[Role], requested_path: &str) -> GuardDecision {
    if loading {
        return GuardDecision::Loading;
    }
    let Some(role) = session.role() else {
        return GuardDecision::RedirectToLogin { from: requested_path.to_owned() };
    };
    if !allowed.is_empty() && !allowed.contains(&role) {
        return GuardDecision::RedirectToOwnDashboard(role);
    }
    GuardDecision::Render
}

/// [`decide`] against the shared auth context value.
pub fn decide_for(state: &AuthState, allowed: &[Role], requested_path: &str) -> GuardDecision {
    decide(state.loading, state.store.session(), allowed, requested_path)
}

/// Re-evaluate the guard on every auth or location change and navigate
/// (replacing history) whenever the decision is a redirect. Returns the
/// memoized decision for rendering.
pub fn install_route_guard<P, F>(
    auth: RwSignal<AuthState>,
    allowed: &'static [Role],
    requested_path: P,
    navigate: F,
) -> Memo<GuardDecision>
where
    P: Fn() -> String + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let decision = Memo::new(move |_| auth.with(|state| decide_for(state, allowed, &requested_path())));

    Effect::new(move || {
        let current = decision.get();
        let Some(target) = current.redirect_target() else {
            return;
        };
        if let GuardDecision::RedirectToLogin { from } = &current {
            auth.update_untracked(|state| state.remember_return_path(from));
        }
        log::debug!("route guard redirect -> {target}");
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    decision
}
