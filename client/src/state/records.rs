//! Student-records filters for the admin roster.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::types::{Student, StudentStatus};
use crate::util::text::any_matches;

/// Roster tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudentTab {
    #[default]
    All,
    Active,
    Inactive,
    Pending,
}

impl StudentTab {
    pub const ALL: [StudentTab; 4] = [StudentTab::All, StudentTab::Active, StudentTab::Inactive, StudentTab::Pending];

    pub fn label(self) -> &'static str {
        match self {
            StudentTab::All => "All Students",
            StudentTab::Active => "Active",
            StudentTab::Inactive => "Inactive",
            StudentTab::Pending => "Pending",
        }
    }

    fn status(self) -> Option<StudentStatus> {
        match self {
            StudentTab::All => None,
            StudentTab::Active => Some(StudentStatus::Active),
            StudentTab::Inactive => Some(StudentStatus::Inactive),
            StudentTab::Pending => Some(StudentStatus::Pending),
        }
    }
}

/// Students in `tab` whose full name, email, or id matches `query`.
pub fn filter_students<'a>(students: &'a [Student], tab: StudentTab, query: &str) -> Vec<&'a Student> {
    students
        .iter()
        .filter(|s| tab.status().is_none_or(|status| s.status == status))
        .filter(|s| {
            let name = s.full_name();
            any_matches([name.as_str(), s.email.as_str(), s.id.as_str()], query)
        })
        .collect()
}

/// Header tallies: total, active, pending, inactive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
}

pub fn status_counts(students: &[Student]) -> StatusCounts {
    students.iter().fold(StatusCounts::default(), |mut acc, s| {
        acc.total += 1;
        match s.status {
            StudentStatus::Active => acc.active += 1,
            StudentStatus::Pending => acc.pending += 1,
            StudentStatus::Inactive => acc.inactive += 1,
        }
        acc
    })
}
