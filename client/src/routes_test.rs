use super::*;

// =============================================================
// Route table
// =============================================================

#[test]
fn role_dashboards_allow_only_their_role() {
    for role in Role::ALL {
        let path = role.dashboard_path();
        assert_eq!(allowed_roles(&path), Some(&[role][..]));
        for other in Role::ALL.into_iter().filter(|r| *r != role) {
            assert!(!permits(&path, other), "{other} must not open {path}");
        }
    }
}

#[test]
fn shared_features_allow_every_role() {
    for path in ["/calendar", "/messages", "/notifications", "/schedule", "/grades", "/settings", "/profile"] {
        for role in Role::ALL {
            assert!(permits(path, role), "{role} should open {path}");
        }
    }
}

#[test]
fn attendance_is_staff_only() {
    assert!(permits("/attendance", Role::Teacher));
    assert!(permits("/attendance", Role::Admin));
    assert!(!permits("/attendance", Role::Student));
    assert!(!permits("/attendance", Role::Parent));
}

#[test]
fn admin_sections_are_admin_only() {
    for path in ["/students", "/teachers", "/schedule-builder", "/reports"] {
        assert_eq!(allowed_roles(path), Some(ADMIN_ONLY));
    }
}

#[test]
fn role_sections_match_owner() {
    assert_eq!(allowed_roles("/courses"), Some(STUDENT_ONLY));
    assert_eq!(allowed_roles("/classes"), Some(TEACHER_ONLY));
    assert_eq!(allowed_roles("/children"), Some(PARENT_ONLY));
}

#[test]
fn public_and_unknown_paths_have_no_allow_list() {
    assert_eq!(allowed_roles("/"), None);
    assert_eq!(allowed_roles("/nope"), None);
    assert!(!permits("/", Role::Admin));
    assert!(!permits("/nope", Role::Admin));
}

#[test]
fn every_protected_route_names_its_roles() {
    for spec in ROUTES {
        if let Access::Roles(roles) = spec.access {
            assert!(!roles.is_empty(), "{} would open to every role", spec.path);
            assert_eq!(allowed_roles(spec.path), Some(roles));
        }
    }
}

#[test]
fn attendance_allow_list_is_the_staff_set() {
    assert_eq!(allowed_roles("/attendance"), Some(STAFF));
    assert_ne!(allowed_roles("/attendance"), Some(ANY_ROLE));
    assert_eq!(allowed_roles("/dashboard"), None);
}

#[test]
fn lookup_ignores_trailing_slash_and_query() {
    assert_eq!(find("/calendar/").map(|r| r.path), Some("/calendar"));
    assert_eq!(find("/grades?tab=assessments").map(|r| r.path), Some("/grades"));
    assert_eq!(find("").map(|r| r.path), Some("/"));
}

#[test]
fn bare_dashboard_redirects_to_student_dashboard() {
    assert_eq!(redirect_for("/dashboard"), Some("/dashboard/student"));
}

#[test]
fn unknown_paths_redirect_home() {
    assert_eq!(redirect_for("/does-not-exist"), Some("/"));
    assert_eq!(redirect_for("/unknown"), Some("/"));
    assert_eq!(redirect_for("/calendar"), None);
    assert_eq!(redirect_for("/"), None);
}

// =============================================================
// Sidebar links
// =============================================================

#[test]
fn nav_links_start_with_common_entries() {
    for role in Role::ALL {
        let links = nav_links(role);
        assert_eq!(links[0].to, role.dashboard_path());
        assert_eq!(links[1].to, "/calendar");
        assert_eq!(links[2].to, "/messages");
    }
}

#[test]
fn nav_links_never_point_at_forbidden_paths() {
    for role in Role::ALL {
        for entry in nav_links(role).into_iter().chain(footer_links()) {
            assert!(permits(&entry.to, role), "{role} sidebar links to forbidden {}", entry.to);
        }
    }
}

#[test]
fn admin_sidebar_includes_schedule_builder() {
    let links = nav_links(Role::Admin);
    assert!(links.iter().any(|l| l.to == "/schedule-builder"));
    assert!(!nav_links(Role::Student).iter().any(|l| l.to == "/schedule-builder"));
}

#[test]
fn title_falls_back_to_product_name() {
    assert_eq!(title_for("/calendar"), "Calendar");
    assert_eq!(title_for("/unknown"), "EduSmart");
}
