//! Top bar for signed-in pages: page title, search box, and the user menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::LOGIN_PATH;
use crate::routes;
use crate::state::auth::AuthState;

/// Sign out and return to the login page, replacing history so Back does not
/// reopen a protected view.
pub fn sign_out(auth: RwSignal<AuthState>, navigate: impl Fn(&str, NavigateOptions)) {
    auth.update(AuthState::logout);
    navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let title = move || routes::title_for(&location.pathname.get());
    let name = move || auth.with(|a| a.user().map(|u| u.name.clone()).unwrap_or_default());
    let role_label = move || auth.with(|a| a.user().map(|u| u.role.label()).unwrap_or_default());
    let initials = move || auth.with(|a| a.user().map(crate::net::types::User::initials).unwrap_or_default());
    let avatar = move || auth.with(|a| a.user().and_then(|u| u.avatar.clone()));

    let on_logout = move |_| {
        menu_open.set(false);
        sign_out(auth, navigate.clone());
    };

    view! {
        <header class="app-header">
            <h1 class="app-header__title">{title}</h1>
            <input class="app-header__search" type="search" placeholder="Search..."/>
            <span class="app-header__spacer"></span>
            <a href="/notifications" class="app-header__bell" title="Notifications">
                "🔔"
            </a>
            <div class="app-header__user">
                <button class="app-header__user-button" on:click=move |_| menu_open.update(|o| *o = !*o)>
                    {move || match avatar() {
                        Some(src) => view! { <img class="avatar" src=src alt=name/> }.into_any(),
                        None => view! { <span class="avatar avatar--initials">{initials}</span> }.into_any(),
                    }}
                    <span class="app-header__user-text">
                        <span class="app-header__user-name">{name}</span>
                        <span class="app-header__user-role">{role_label}</span>
                    </span>
                </button>
                <Show when=move || menu_open.get()>
                    <div class="app-header__menu" on:click=move |_| menu_open.set(false)>
                        <a href="/profile" class="app-header__menu-item">"Profile"</a>
                        <a href="/settings" class="app-header__menu-item">"Settings"</a>
                        <button class="app-header__menu-item" on:click=on_logout.clone()>
                            "Log out"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
