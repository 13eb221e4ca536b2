//! Grade book state: per-student scores for the open assessment and the
//! new-assessment form.

#[cfg(test)]
#[path = "grades_test.rs"]
mod grades_test;

use crate::net::types::{Assessment, AssessmentStatus, NewAssessment};
use crate::util::text::matches_query;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeStatus {
    Graded,
    Submitted,
    Pending,
}

impl GradeStatus {
    pub fn label(self) -> &'static str {
        match self {
            GradeStatus::Graded => "Graded",
            GradeStatus::Submitted => "Submitted",
            GradeStatus::Pending => "Pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeRow {
    pub student_id: String,
    pub name: String,
    pub score: Option<u32>,
    pub feedback: Option<String>,
    pub status: GradeStatus,
}

fn row(id: &str, name: &str, score: Option<u32>, status: GradeStatus) -> GradeRow {
    GradeRow { student_id: id.to_owned(), name: name.to_owned(), score, feedback: None, status }
}

pub fn sample_rows() -> Vec<GradeRow> {
    vec![
        row("1", "Emma Thompson", Some(85), GradeStatus::Graded),
        row("2", "Liam Johnson", Some(92), GradeStatus::Graded),
        row("3", "Olivia Martinez", None, GradeStatus::Pending),
        row("4", "Noah Williams", Some(78), GradeStatus::Graded),
        row("5", "Ava Brown", None, GradeStatus::Submitted),
    ]
}

pub fn filter_rows<'a>(rows: &'a [GradeRow], query: &str) -> Vec<&'a GradeRow> {
    rows.iter().filter(|r| matches_query(&r.name, query)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GradeError {
    #[error("Enter a whole-number score")]
    NotANumber,
    #[error("Score must be between 0 and {0}")]
    OutOfRange(u32),
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Parse a score typed into the grade dialog against `max_points`.
///
/// # Errors
///
/// [`GradeError::NotANumber`] or [`GradeError::OutOfRange`].
pub fn parse_score(raw: &str, max_points: u32) -> Result<u32, GradeError> {
    let score: u32 = raw.trim().parse().map_err(|_| GradeError::NotANumber)?;
    if score > max_points {
        return Err(GradeError::OutOfRange(max_points));
    }
    Ok(score)
}

/// Average of graded scores, if any.
pub fn class_average(rows: &[GradeRow]) -> Option<f64> {
    let scores: Vec<u32> = rows.iter().filter_map(|r| r.score).collect();
    if scores.is_empty() {
        return None;
    }
    Some(f64::from(scores.iter().sum::<u32>()) / f64::from(u32::try_from(scores.len()).unwrap_or(u32::MAX)))
}

/// Grade book page state.
#[derive(Clone, Debug)]
pub struct GradeBook {
    pub assessments: Vec<Assessment>,
    pub rows: Vec<GradeRow>,
    pub query: String,
}

impl GradeBook {
    pub fn new(assessments: Vec<Assessment>) -> Self {
        Self { assessments, rows: sample_rows(), query: String::new() }
    }

    pub fn visible_rows(&self) -> Vec<&GradeRow> {
        filter_rows(&self.rows, &self.query)
    }

    /// Record a validated score and mark the row graded.
    pub fn record(&mut self, student_id: &str, score: u32, feedback: Option<String>) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.student_id == student_id) {
            row.score = Some(score);
            row.feedback = feedback.filter(|f| !f.trim().is_empty());
            row.status = GradeStatus::Graded;
        }
    }

    pub fn add_assessment(&mut self, assessment: Assessment) {
        self.assessments.push(assessment);
    }
}

/// Check a new-assessment form and build the request body.
///
/// # Errors
///
/// [`GradeError::Missing`] for a blank title or due date;
/// [`GradeError::NotANumber`] for a non-numeric or zero point total.
pub fn assessment_draft(
    title: &str,
    kind: &str,
    due_date: &str,
    total_points: &str,
    publish: bool,
) -> Result<NewAssessment, GradeError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(GradeError::Missing("Title"));
    }
    let due_date = due_date.trim();
    if due_date.is_empty() {
        return Err(GradeError::Missing("Due date"));
    }
    let total_points = match total_points.trim().parse::<u32>() {
        Ok(points) if points > 0 => points,
        _ => return Err(GradeError::NotANumber),
    };
    Ok(NewAssessment {
        title: title.to_owned(),
        kind: if kind.trim().is_empty() { "Assignment".to_owned() } else { kind.trim().to_owned() },
        due_date: due_date.to_owned(),
        total_points,
        status: if publish { AssessmentStatus::Published } else { AssessmentStatus::Draft },
    })
}
