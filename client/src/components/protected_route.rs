//! Guard wrapper for role-scoped views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route's view in `app.rs`. The decision comes from
//! `util::auth::install_route_guard`, which also performs any redirect; this
//! component only chooses what to show meanwhile.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, install_route_guard};

/// Render `children` only for a signed-in user whose role is in `roles`
/// (any role when `roles` is empty).
#[component]
pub fn ProtectedRoute(#[prop(optional)] roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let decision = install_route_guard(auth, roles, move || location.pathname.get(), use_navigate());

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Loading => view! {
            <div class="route-loading" aria-busy="true">
                <span class="route-loading__spinner"></span>
                "Loading..."
            </div>
        }
        .into_any(),
        GuardDecision::RedirectToLogin { .. } | GuardDecision::RedirectToOwnDashboard(_) => ().into_any(),
    }
}
