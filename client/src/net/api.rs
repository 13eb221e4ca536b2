//! Async data API backed by canned records.
//!
//! Client-side (hydrate): each call waits out a simulated network delay
//! before answering. Server-side (SSR) and tests: calls resolve immediately.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here can fail; submit calls report acceptance as `bool` so pages
//! keep the same shape they would need against a real back office.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::mock;
use super::types::{AttendanceEntry, AttendanceRecord, Assessment, ClassSession, Course, NewAssessment, Student};

/// Wait out the simulated round trip. No-op outside the browser.
pub(crate) async fn simulated_latency(ms: u64) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

async fn round_trip() {
    simulated_latency(crate::config::MOCK_LATENCY_MS).await;
}

pub async fn fetch_students() -> Vec<Student> {
    round_trip().await;
    mock::students()
}

pub async fn fetch_schedule() -> Vec<ClassSession> {
    round_trip().await;
    mock::schedule()
}

pub async fn fetch_attendance_records() -> Vec<AttendanceRecord> {
    round_trip().await;
    mock::attendance_records()
}

pub async fn fetch_courses() -> Vec<Course> {
    round_trip().await;
    mock::courses()
}

pub async fn fetch_assessments() -> Vec<Assessment> {
    round_trip().await;
    mock::assessments()
}

/// Submit a roll call for `class_name`.
pub async fn submit_attendance(class_name: &str, entries: &[AttendanceEntry]) -> bool {
    round_trip().await;
    let marked = entries.iter().filter(|e| e.status.is_some()).count();
    log::info!("attendance submitted class={class_name} marked={marked}/{}", entries.len());
    true
}

/// Record a score for one student on one assignment.
pub async fn submit_grade(student_id: &str, assignment_id: &str, score: f64, feedback: Option<&str>) -> bool {
    round_trip().await;
    log::info!(
        "grade submitted student={student_id} assignment={assignment_id} score={score} feedback={}",
        feedback.is_some()
    );
    true
}

/// Create an assessment and return it with a freshly assigned id.
pub async fn create_assessment(draft: NewAssessment) -> Assessment {
    round_trip().await;
    let assessment = assessment_from_draft(draft, &new_record_id());
    log::info!("assessment created id={}", assessment.id);
    assessment
}

/// Id for a record created in this session, e.g. `new-<uuid>`.
pub fn new_record_id() -> String {
    format!("new-{}", uuid::Uuid::new_v4())
}

fn assessment_from_draft(draft: NewAssessment, id: &str) -> Assessment {
    Assessment {
        id: id.to_owned(),
        title: draft.title,
        kind: draft.kind,
        due_date: draft.due_date,
        total_points: draft.total_points,
        status: draft.status,
    }
}
