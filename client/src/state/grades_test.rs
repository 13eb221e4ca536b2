use super::*;
use crate::net::mock;

#[test]
fn search_filters_rows_by_name() {
    let rows = sample_rows();
    let hits = filter_rows(&rows, "  OLIVIA ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].student_id, "3");
    assert_eq!(filter_rows(&rows, "").len(), 5);
}

#[test]
fn parse_score_bounds() {
    assert_eq!(parse_score(" 42 ", 50), Ok(42));
    assert_eq!(parse_score("51", 50), Err(GradeError::OutOfRange(50)));
    assert_eq!(parse_score("-1", 50), Err(GradeError::NotANumber));
    assert_eq!(parse_score("abc", 50), Err(GradeError::NotANumber));
}

#[test]
fn average_ignores_ungraded() {
    let rows = sample_rows();
    assert_eq!(class_average(&rows), Some(85.0));
    assert_eq!(class_average(&[]), None);
}

#[test]
fn record_marks_graded_and_drops_blank_feedback() {
    let mut book = GradeBook::new(mock::assessments());
    book.record("5", 40, Some("   ".to_owned()));
    let row = book.rows.iter().find(|r| r.student_id == "5").unwrap();
    assert_eq!(row.score, Some(40));
    assert_eq!(row.status, GradeStatus::Graded);
    assert_eq!(row.feedback, None);
}

#[test]
fn assessment_draft_validates() {
    assert_eq!(assessment_draft(" ", "Quiz", "2024-01-01", "10", false), Err(GradeError::Missing("Title")));
    assert_eq!(assessment_draft("Quiz 6", "Quiz", "", "10", false), Err(GradeError::Missing("Due date")));
    assert_eq!(assessment_draft("Quiz 6", "Quiz", "2024-01-01", "0", false), Err(GradeError::NotANumber));

    let draft = assessment_draft("Quiz 6", "", "2024-01-01", "20", true).unwrap();
    assert_eq!(draft.kind, "Assignment");
    assert_eq!(draft.total_points, 20);
    assert_eq!(draft.status, AssessmentStatus::Published);
}
