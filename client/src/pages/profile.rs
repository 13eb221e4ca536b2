//! Account profile and settings for the signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::sign_out;
use crate::state::auth::AuthState;
use crate::util::preferences::{self, Preferences};
use crate::util::storage::BrowserStorage;

fn toggle_row(
    label: &'static str,
    prefs: RwSignal<Preferences>,
    read: fn(&Preferences) -> bool,
    write: fn(&mut Preferences, bool),
) -> impl IntoView + use<> {
    view! {
        <label class="settings__toggle">
            <input
                type="checkbox"
                prop:checked=move || prefs.with(read)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    prefs.update(|p| write(p, checked));
                }
            />
            {label}
        </label>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let prefs = RwSignal::new(preferences::load(&BrowserStorage));

    Effect::new(move || {
        let current = prefs.get();
        preferences::apply_theme(current.dark_mode);
        preferences::save(&BrowserStorage, current);
    });

    let Some(user) = auth.with_untracked(|a| a.user().cloned()) else {
        return ().into_any();
    };
    let avatar = user.avatar.clone().map_or_else(
        || view! { <span class="profile__initials">{user.initials()}</span> }.into_any(),
        |src| view! { <img class="profile__avatar" src=src alt=""/> }.into_any(),
    );

    view! {
        <div class="profile-page">
            <section class="card profile">
                {avatar}
                <div class="profile__details">
                    <h2>{user.name.clone()}</h2>
                    <p>{user.email.clone()}</p>
                    <span class="badge">{user.role.label()}</span>
                </div>
            </section>
            <section class="card settings">
                <h3 class="card__title">"Settings"</h3>
                {toggle_row("Dark mode", prefs, |p| p.dark_mode, |p, v| p.dark_mode = v)}
                {toggle_row("Email notifications", prefs, |p| p.email_notifications, |p, v| p.email_notifications = v)}
                {toggle_row("SMS notifications", prefs, |p| p.sms_notifications, |p, v| p.sms_notifications = v)}
            </section>
            <button class="btn btn--danger" on:click=move |_| sign_out(auth, navigate.clone())>
                "Log out"
            </button>
        </div>
    }
    .into_any()
}
