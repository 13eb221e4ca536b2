//! Navigational surface: which paths exist and who may open them.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard never computes access itself; `app.rs` looks up each
//! protected view's allow-list here by path, and forwards redirecting and
//! unknown paths through `redirect_for`. The sidebar builds its links from
//! the same table so it never offers a path that would bounce.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

pub const ANY_ROLE: &[Role] = &Role::ALL;
pub const STUDENT_ONLY: &[Role] = &[Role::Student];
pub const TEACHER_ONLY: &[Role] = &[Role::Teacher];
pub const PARENT_ONLY: &[Role] = &[Role::Parent];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const STAFF: &[Role] = &[Role::Teacher, Role::Admin];

/// How a path is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Open to everyone, signed in or not.
    Public,
    /// Signed-in users whose role is listed.
    Roles(&'static [Role]),
    /// Immediately replaced by another path.
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub title: &'static str,
    pub access: Access,
}

const fn route(path: &'static str, title: &'static str, access: Access) -> RouteSpec {
    RouteSpec { path, title, access }
}

pub const ROUTES: &[RouteSpec] = &[
    route("/", "Sign in", Access::Public),
    route("/dashboard", "Dashboard", Access::Redirect("/dashboard/student")),
    route("/dashboard/student", "Student Dashboard", Access::Roles(STUDENT_ONLY)),
    route("/dashboard/teacher", "Teacher Dashboard", Access::Roles(TEACHER_ONLY)),
    route("/dashboard/parent", "Parent Dashboard", Access::Roles(PARENT_ONLY)),
    route("/dashboard/admin", "Admin Dashboard", Access::Roles(ADMIN_ONLY)),
    route("/calendar", "Calendar", Access::Roles(ANY_ROLE)),
    route("/messages", "Messages", Access::Roles(ANY_ROLE)),
    route("/notifications", "Notifications", Access::Roles(ANY_ROLE)),
    route("/schedule", "Schedule", Access::Roles(ANY_ROLE)),
    route("/grades", "Grades", Access::Roles(ANY_ROLE)),
    route("/attendance", "Attendance", Access::Roles(STAFF)),
    route("/students", "Students", Access::Roles(ADMIN_ONLY)),
    route("/teachers", "Teachers", Access::Roles(ADMIN_ONLY)),
    route("/schedule-builder", "Schedule Builder", Access::Roles(ADMIN_ONLY)),
    route("/reports", "Reports", Access::Roles(ADMIN_ONLY)),
    route("/courses", "Courses", Access::Roles(STUDENT_ONLY)),
    route("/classes", "Classes", Access::Roles(TEACHER_ONLY)),
    route("/children", "Children", Access::Roles(PARENT_ONLY)),
    route("/settings", "Settings", Access::Roles(ANY_ROLE)),
    route("/profile", "Profile", Access::Roles(ANY_ROLE)),
];

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Look up the route registered for `path` (query/fragment and trailing
/// slash ignored).
pub fn find(path: &str) -> Option<&'static RouteSpec> {
    let path = normalize(path);
    ROUTES.iter().find(|r| r.path == path)
}

/// Role allow-list for a protected path; `None` for public, redirecting, or
/// unknown paths.
pub fn allowed_roles(path: &str) -> Option<&'static [Role]> {
    match find(path)?.access {
        Access::Roles(roles) => Some(roles),
        Access::Public | Access::Redirect(_) => None,
    }
}

/// Whether a signed-in `role` may open the protected `path`.
pub fn permits(path: &str, role: Role) -> bool {
    allowed_roles(path).is_some_and(|roles| roles.is_empty() || roles.contains(&role))
}

/// Where `path` is sent before rendering: its redirect target, `/` for
/// unknown paths, or `None` when it renders in place.
pub fn redirect_for(path: &str) -> Option<&'static str> {
    match find(path) {
        Some(RouteSpec { access: Access::Redirect(target), .. }) => Some(*target),
        Some(_) => None,
        None => Some(crate::config::LOGIN_PATH),
    }
}

/// Sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub to: String,
    pub label: &'static str,
    pub icon: &'static str,
}

fn link(to: impl Into<String>, label: &'static str, icon: &'static str) -> NavLink {
    NavLink { to: to.into(), label, icon }
}

/// Main sidebar links for `role`: dashboard, calendar, messages, then the
/// role's own sections.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    let mut links = vec![
        link(role.dashboard_path(), "Dashboard", "home"),
        link("/calendar", "Calendar", "calendar"),
        link("/messages", "Messages", "message"),
    ];
    match role {
        Role::Student => links.extend([
            link("/courses", "Courses", "book"),
            link("/grades", "Grades", "file"),
            link("/schedule", "Schedule", "clock"),
        ]),
        Role::Teacher => links.extend([
            link("/classes", "Classes", "users"),
            link("/attendance", "Attendance", "clock"),
            link("/grades", "Grades", "file"),
            link("/schedule", "Schedule", "clock"),
        ]),
        Role::Parent => links.extend([
            link("/children", "Children", "users"),
            link("/grades", "Grades", "file"),
            link("/schedule", "Schedule", "clock"),
        ]),
        Role::Admin => links.extend([
            link("/students", "Students", "users"),
            link("/teachers", "Teachers", "users"),
            link("/schedule", "Schedule", "clock"),
            link("/schedule-builder", "Schedule Builder", "calendar"),
            link("/reports", "Reports", "chart"),
        ]),
    }
    links
}

/// Footer links shown to every signed-in role.
pub fn footer_links() -> Vec<NavLink> {
    vec![
        link("/notifications", "Notifications", "bell"),
        link("/settings", "Settings", "settings"),
        link("/profile", "Profile", "user"),
    ]
}

/// Page title for `path`, falling back to the product name.
pub fn title_for(path: &str) -> &'static str {
    find(path).map_or(crate::config::APP_NAME, |r| r.title)
}
