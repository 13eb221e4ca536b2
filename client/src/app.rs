//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{app_shell::AppShell, protected_route::ProtectedRoute};
use crate::config::{APP_NAME, LOGIN_PATH};
use crate::pages::{
    attendance::AttendancePage,
    calendar::CalendarPage,
    dashboard::{AdminDashboard, ParentDashboard, StudentDashboard, TeacherDashboard},
    grades::GradesPage,
    home::HomePage,
    messages::MessagesPage,
    profile::ProfilePage,
    schedule::SchedulePage,
    schedule_builder::ScheduleBuilderPage,
    students::StudentsPage,
};
use crate::routes;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// A page inside the signed-in chrome, shown to the roles `routes::ROUTES`
/// lists for `path`. A path without an allow-list there is never rendered.
fn guarded<V: IntoView + Send + 'static>(path: &'static str, page: fn() -> V) -> AnyView {
    let Some(roles) = routes::allowed_roles(path) else {
        log::warn!("no allow-list registered for {path}");
        return view! { <Redirect path=LOGIN_PATH/> }.into_any();
    };
    view! {
        <ProtectedRoute roles>
            <AppShell>{page()}</AppShell>
        </ProtectedRoute>
    }
    .into_any()
}

/// Send `path` wherever the route table forwards it.
fn forward(path: &'static str) -> impl IntoView + use<> {
    view! { <Redirect path=routes::redirect_for(path).unwrap_or(LOGIN_PATH)/> }
}

/// Root application component.
///
/// Owns the single `AuthState` for the app. It starts in the loading phase
/// and is restored from storage once the browser runs effects, so server
/// rendering never redirects on a session it cannot see.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    Effect::new(move || auth.update(AuthState::restore));

    view! {
        <Stylesheet id="leptos" href="/pkg/edusmart.css"/>
        <Title text=APP_NAME/>

        <Router>
            // Any path missing from the table.
            <Routes fallback=|| forward("/unknown")>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("dashboard") view=|| forward("/dashboard")/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("student"))
                    view=|| guarded("/dashboard/student", StudentDashboard)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("teacher"))
                    view=|| guarded("/dashboard/teacher", TeacherDashboard)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("parent"))
                    view=|| guarded("/dashboard/parent", ParentDashboard)
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("admin"))
                    view=|| guarded("/dashboard/admin", AdminDashboard)
                />
                <Route path=StaticSegment("calendar") view=|| guarded("/calendar", CalendarPage)/>
                <Route path=StaticSegment("messages") view=|| guarded("/messages", MessagesPage)/>
                <Route path=StaticSegment("notifications") view=|| guarded("/notifications", MessagesPage)/>
                <Route path=StaticSegment("schedule") view=|| guarded("/schedule", SchedulePage)/>
                <Route path=StaticSegment("grades") view=|| guarded("/grades", GradesPage)/>
                <Route path=StaticSegment("attendance") view=|| guarded("/attendance", AttendancePage)/>
                <Route path=StaticSegment("students") view=|| guarded("/students", StudentsPage)/>
                <Route path=StaticSegment("teachers") view=|| guarded("/teachers", StudentsPage)/>
                <Route path=StaticSegment("schedule-builder") view=|| guarded("/schedule-builder", ScheduleBuilderPage)/>
                <Route path=StaticSegment("reports") view=|| guarded("/reports", AdminDashboard)/>
                <Route path=StaticSegment("courses") view=|| guarded("/courses", SchedulePage)/>
                <Route path=StaticSegment("classes") view=|| guarded("/classes", SchedulePage)/>
                <Route path=StaticSegment("children") view=|| guarded("/children", ParentDashboard)/>
                <Route path=StaticSegment("settings") view=|| guarded("/settings", ProfilePage)/>
                <Route path=StaticSegment("profile") view=|| guarded("/profile", ProfilePage)/>
            </Routes>
        </Router>
    }
}
