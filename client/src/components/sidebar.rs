//! Role-aware navigation sidebar.
//!
//! Links come from `routes::nav_links`, so a user is never offered a path
//! the route guard would bounce.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::header::sign_out;
use crate::config::APP_NAME;
use crate::routes::{self, NavLink};
use crate::state::auth::AuthState;

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "home" => "⌂",
        "calendar" => "▦",
        "message" => "✉",
        "book" => "📖",
        "file" => "📄",
        "clock" => "◷",
        "users" => "👥",
        "chart" => "📊",
        "bell" => "🔔",
        "settings" => "⚙",
        "user" => "👤",
        _ => "•",
    }
}

#[component]
fn SidebarLink(link: NavLink) -> impl IntoView {
    let location = use_location();
    let to = link.to.clone();
    let active = move || location.pathname.get() == to;

    view! {
        <a href=link.to class="sidebar__link" class:sidebar__link--active=active>
            <span class="sidebar__icon">{icon_glyph(link.icon)}</span>
            <span class="sidebar__label">{link.label}</span>
        </a>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let collapsed = RwSignal::new(false);

    let links = move || {
        auth.with(|a| a.user().map(|u| routes::nav_links(u.role)).unwrap_or_default())
            .into_iter()
            .map(|link| view! { <SidebarLink link/> })
            .collect_view()
    };

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || collapsed.get()>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"🏫"</span>
                <span class="sidebar__name">{APP_NAME}</span>
                <button
                    class="sidebar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>
            <nav class="sidebar__nav">{links}</nav>
            <div class="sidebar__footer">
                {routes::footer_links().into_iter().map(|link| view! { <SidebarLink link/> }).collect_view()}
                <button class="sidebar__link sidebar__logout" on:click=move |_| sign_out(auth, navigate.clone())>
                    <span class="sidebar__icon">"⎋"</span>
                    <span class="sidebar__label">"Logout"</span>
                </button>
            </div>
        </aside>
    }
}
