//! Sign-in card: role tabs, credentials, and the forgot-password form.
//!
//! ERROR HANDLING
//! ==============
//! A rejected login leaves its message in `AuthState::error`, rendered under
//! the form. A second submit while one is pending is refused by the store and
//! ignored here. Navigation after a successful login belongs to the home
//! page, which watches the session.

use leptos::prelude::*;

use crate::net::types::{Role, User};
use crate::state::auth::{AuthError, AuthState};

#[component]
pub fn AuthCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let role = RwSignal::new(Role::Student);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let forgot_mode = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let busy = move || auth.with(|a| a.store.is_login_pending());
    let error = move || auth.with(|a| a.error.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_owned();

        if forgot_mode.get() {
            if email_value.is_empty() {
                notice.set(Some("Enter the email address for your account.".to_owned()));
                return;
            }
            log::info!("password reset requested");
            notice.set(Some(format!("If {email_value} has an account, a reset link is on its way.")));
            return;
        }

        notice.set(None);
        let login = AuthState::login_async(auth, email_value, password.get(), role.get());
        let report = |outcome: Result<User, AuthError>| match outcome {
            Ok(user) => log::debug!("login finished for {}", user.id),
            Err(err) => log::debug!("login not completed: {err}"),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move { report(login.await) });
        #[cfg(not(feature = "hydrate"))]
        let _ = (login, report);
    };

    let role_tabs = move || {
        Role::ALL
            .into_iter()
            .map(|tab| {
                view! {
                    <button
                        type="button"
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || role.get() == tab
                        on:click=move |_| role.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">
                {move || if forgot_mode.get() { "Reset Password" } else { "Sign in to EduSmart" }}
            </h2>
            <Show when=move || !forgot_mode.get()>
                <p class="auth-card__subtitle">"Choose your role and enter your credentials."</p>
                <div class="auth-card__tabs">{role_tabs}</div>
            </Show>
            <form class="auth-card__form" on:submit=on_submit>
                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-card__input"
                        type="email"
                        placeholder="your.email@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !forgot_mode.get()>
                    <label class="auth-card__label">
                        <span class="auth-card__label-row">
                            "Password"
                            <button
                                type="button"
                                class="auth-card__link"
                                on:click=move |_| {
                                    forgot_mode.set(true);
                                    notice.set(None);
                                }
                            >
                                "Forgot password?"
                            </button>
                        </span>
                        <span class="auth-card__password">
                            <input
                                class="auth-card__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="••••••••"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="auth-card__reveal"
                                title="Show password"
                                on:click=move |_| show_password.update(|s| *s = !*s)
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </button>
                        </span>
                    </label>
                </Show>
                <button class="btn btn--primary auth-card__submit" type="submit" disabled=busy>
                    {move || {
                        if busy() {
                            "Signing in..."
                        } else if forgot_mode.get() {
                            "Send reset link"
                        } else {
                            "Sign in"
                        }
                    }}
                </button>
                <Show when=move || forgot_mode.get()>
                    <button
                        type="button"
                        class="auth-card__link"
                        on:click=move |_| {
                            forgot_mode.set(false);
                            notice.set(None);
                        }
                    >
                        "Back to sign in"
                    </button>
                </Show>
            </form>
            {move || error().map(|msg| view! { <p class="auth-card__error" role="alert">{msg}</p> })}
            {move || notice.get().map(|msg| view! { <p class="auth-card__notice">{msg}</p> })}
            <Show when=move || !forgot_mode.get()>
                <p class="auth-card__hint">"Demo mode: any email and password signs in as the chosen role."</p>
            </Show>
        </div>
    }
}
