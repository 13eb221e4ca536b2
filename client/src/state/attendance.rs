//! Roll-call state for the attendance tracker.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use crate::net::types::{AttendanceEntry, AttendanceRecord, AttendanceStatus};
use crate::util::text::matches_query;

/// Per-status tallies for one roll call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub excused: usize,
    pub unmarked: usize,
}

impl AttendanceSummary {
    pub fn of(entries: &[AttendanceEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, entry| {
            match entry.status {
                Some(AttendanceStatus::Present) => acc.present += 1,
                Some(AttendanceStatus::Absent) => acc.absent += 1,
                Some(AttendanceStatus::Late) => acc.late += 1,
                Some(AttendanceStatus::Excused) => acc.excused += 1,
                None => acc.unmarked += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.present + self.absent + self.late + self.excused + self.unmarked
    }
}

/// Roll call in progress for one class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendanceState {
    pub classes: Vec<String>,
    pub class_name: String,
    pub entries: Vec<AttendanceEntry>,
    pub query: String,
    pub submitted: bool,
}

impl AttendanceState {
    /// Fresh roll call over `roster` for the first of `classes`.
    pub fn new(classes: Vec<String>, roster: Vec<AttendanceEntry>) -> Self {
        let class_name = classes.first().cloned().unwrap_or_default();
        Self { classes, class_name, entries: roster, query: String::new(), submitted: false }
    }

    /// Switch class; marks are reset because they belong to the old class.
    pub fn select_class(&mut self, class_name: &str) {
        if self.class_name == class_name {
            return;
        }
        self.class_name = class_name.to_owned();
        for entry in &mut self.entries {
            entry.status = None;
            entry.notes = None;
        }
        self.submitted = false;
    }

    pub fn set_status(&mut self, student_id: &str, status: AttendanceStatus) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == student_id) {
            entry.status = Some(status);
            self.submitted = false;
        }
    }

    /// Set or clear (blank text) the note on one student.
    pub fn set_note(&mut self, student_id: &str, note: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == student_id) {
            let note = note.trim();
            entry.notes = (!note.is_empty()).then(|| note.to_owned());
        }
    }

    pub fn mark_all(&mut self, status: AttendanceStatus) {
        for entry in &mut self.entries {
            entry.status = Some(status);
        }
        self.submitted = false;
    }

    pub fn filtered(&self) -> Vec<&AttendanceEntry> {
        self.entries.iter().filter(|e| matches_query(&e.name, &self.query)).collect()
    }

    pub fn summary(&self) -> AttendanceSummary {
        AttendanceSummary::of(&self.entries)
    }

    /// Snapshot for the history list.
    pub fn to_record(&self, id: String, date: String) -> AttendanceRecord {
        AttendanceRecord {
            id,
            date,
            class_name: self.class_name.clone(),
            students: self.entries.clone(),
            submitted: self.submitted,
        }
    }
}

/// Absent students in a submitted record, for the follow-up panel.
pub fn absentees(record: &AttendanceRecord) -> Vec<&AttendanceEntry> {
    record
        .students
        .iter()
        .filter(|e| e.status == Some(AttendanceStatus::Absent))
        .collect()
}
