use super::*;
use crate::net::mock;

fn ids(students: &[&Student]) -> Vec<String> {
    students.iter().map(|s| s.id.clone()).collect()
}

#[test]
fn tabs_filter_by_status() {
    let students = mock::students();
    assert_eq!(filter_students(&students, StudentTab::All, "").len(), 5);
    assert_eq!(ids(&filter_students(&students, StudentTab::Active, "")), vec!["1001", "1002", "1004"]);
    assert_eq!(ids(&filter_students(&students, StudentTab::Inactive, "")), vec!["1003"]);
    assert_eq!(ids(&filter_students(&students, StudentTab::Pending, "")), vec!["1005"]);
}

#[test]
fn search_covers_name_email_and_id() {
    let students = mock::students();
    assert_eq!(ids(&filter_students(&students, StudentTab::All, "emma johnson")), vec!["1001"]);
    assert_eq!(ids(&filter_students(&students, StudentTab::All, "noah.w@")), vec!["1002"]);
    assert_eq!(ids(&filter_students(&students, StudentTab::All, "1005")), vec!["1005"]);
    assert!(filter_students(&students, StudentTab::Active, "olivia").is_empty());
}

#[test]
fn counts_match_roster() {
    let counts = status_counts(&mock::students());
    assert_eq!(counts, StatusCounts { total: 5, active: 3, pending: 1, inactive: 1 });
}
