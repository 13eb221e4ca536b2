use super::*;
use crate::net::mock;

fn tracker() -> AttendanceState {
    AttendanceState::new(mock::attendance_classes(), mock::roster())
}

#[test]
fn starts_unmarked_on_first_class() {
    let state = tracker();
    assert_eq!(state.class_name, "Mathematics - 10A");
    let summary = state.summary();
    assert_eq!(summary.unmarked, 10);
    assert_eq!(summary.total(), 10);
}

#[test]
fn status_changes_are_counted() {
    let mut state = tracker();
    state.set_status("1", AttendanceStatus::Present);
    state.set_status("2", AttendanceStatus::Absent);
    state.set_status("3", AttendanceStatus::Late);
    state.set_status("3", AttendanceStatus::Excused);
    state.set_status("missing", AttendanceStatus::Late);

    let summary = state.summary();
    assert_eq!(summary.present, 1);
    assert_eq!(summary.absent, 1);
    assert_eq!(summary.late, 0);
    assert_eq!(summary.excused, 1);
    assert_eq!(summary.unmarked, 7);
}

#[test]
fn mark_all_present_overrides_every_mark() {
    let mut state = tracker();
    state.set_status("4", AttendanceStatus::Absent);
    state.mark_all(AttendanceStatus::Present);
    assert_eq!(state.summary().present, 10);
}

#[test]
fn notes_trim_and_clear() {
    let mut state = tracker();
    state.set_note("2", "  doctor  ");
    assert_eq!(state.entries[1].notes.as_deref(), Some("doctor"));
    state.set_note("2", "   ");
    assert_eq!(state.entries[1].notes, None);
}

#[test]
fn search_filters_by_name() {
    let mut state = tracker();
    state.query = "william".to_owned();
    let names: Vec<_> = state.filtered().iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, vec!["Noah Williams"]);
}

#[test]
fn switching_class_resets_marks() {
    let mut state = tracker();
    state.mark_all(AttendanceStatus::Present);
    state.submitted = true;
    state.select_class("Physics - 10A");
    assert_eq!(state.summary().unmarked, 10);
    assert!(!state.submitted);
}

#[test]
fn absentees_lists_absent_only() {
    let records = mock::attendance_records();
    let names: Vec<_> = absentees(&records[0]).iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, vec!["Noah Williams"]);
    assert!(absentees(&records[1]).is_empty());
}
