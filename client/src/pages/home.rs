//! Public landing page with the sign-in card.
//!
//! Once the session is restored and no login is in flight, a signed-in user
//! is sent on: to the path the route guard remembered when their role may
//! open it, otherwise to their own dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::config::APP_NAME;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let Some(user) = auth.with(|a| if a.is_busy() { None } else { a.user().cloned() }) else {
            return;
        };
        let target = auth
            .try_update_untracked(|a| a.take_post_login_target(&user))
            .unwrap_or_else(|| user.role.dashboard_path());
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="home-page__logo">"🏫"</span>
                <h1 class="home-page__brand">{APP_NAME}</h1>
                <nav class="home-page__nav">
                    <a href="#features">"Features"</a>
                    <a href="#about">"About"</a>
                    <a href="#contact">"Contact"</a>
                </nav>
            </header>
            <main class="home-page__main">
                <section class="home-page__welcome" id="features">
                    <h2>"Welcome to EduSmart"</h2>
                    <p class="home-page__lead">
                        "The complete school management system connecting students, teachers, parents, and administrators."
                    </p>
                    <ul class="home-page__features">
                        <li>
                            <h3>"Centralized learning"</h3>
                            <p>"Every course resource in one place."</p>
                        </li>
                        <li>
                            <h3>"Better communication"</h3>
                            <p>"Stay connected with the whole school community."</p>
                        </li>
                        <li>
                            <h3>"Efficient administration"</h3>
                            <p>"Simplify day-to-day school operations."</p>
                        </li>
                    </ul>
                </section>
                <section class="home-page__login">
                    <AuthCard/>
                </section>
            </main>
            <footer class="home-page__footer" id="contact">
                <p id="about">"© EduSmart. All rights reserved."</p>
            </footer>
        </div>
    }
}
