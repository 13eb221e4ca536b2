use futures::executor::block_on;

use super::*;
use crate::net::types::{AssessmentStatus, AttendanceStatus};

#[test]
fn fetchers_return_canned_records() {
    assert_eq!(block_on(fetch_students()).len(), 5);
    assert_eq!(block_on(fetch_schedule()).len(), 6);
    assert_eq!(block_on(fetch_attendance_records()).len(), 2);
    assert_eq!(block_on(fetch_courses()).len(), 4);
    assert_eq!(block_on(fetch_assessments()).len(), 5);
}

#[test]
fn submit_attendance_accepts_partial_roll() {
    let mut roster = mock::roster();
    roster[0].status = Some(AttendanceStatus::Present);
    assert!(block_on(submit_attendance("Mathematics - 10A", &roster)));
}

#[test]
fn submit_grade_accepts_without_feedback() {
    assert!(block_on(submit_grade("1001", "2", 42.0, None)));
}

#[test]
fn create_assessment_assigns_new_id_and_keeps_fields() {
    let draft = NewAssessment {
        title: "Pop Quiz".to_owned(),
        kind: "Quiz".to_owned(),
        due_date: "2023-12-01".to_owned(),
        total_points: 10,
        status: AssessmentStatus::Draft,
    };
    let created = block_on(create_assessment(draft));
    assert!(created.id.starts_with("new-"));
    assert_eq!(created.title, "Pop Quiz");
    assert_eq!(created.total_points, 10);
    assert_eq!(created.status, AssessmentStatus::Draft);
}

#[test]
fn new_record_ids_are_unique() {
    assert_ne!(new_record_id(), new_record_id());
}
