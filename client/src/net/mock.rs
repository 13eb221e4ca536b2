//! Canned records standing in for a school back office.
//!
//! Every fetcher in `net::api` reads from here; nothing is mutated in place,
//! so each call returns a fresh copy.

use super::types::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, Assessment, AssessmentStatus, ClassSession, Course, Role,
    Student, StudentStatus, User,
};

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// The fixed demo identity for `role`, with `email` echoed into the record.
pub fn demo_user(role: Role, email: &str) -> User {
    let (id, name, seed) = match role {
        Role::Student => ("student-1", "Alex Johnson", "student1"),
        Role::Teacher => ("teacher-1", "Sarah Davis", "teacher1"),
        Role::Parent => ("parent-1", "Michael Johnson", "parent1"),
        Role::Admin => ("admin-1", "Admin User", "admin1"),
    };
    User {
        id: id.to_owned(),
        email: email.to_owned(),
        name: name.to_owned(),
        role,
        avatar: Some(format!("{AVATAR_BASE_URL}{seed}")),
    }
}

#[allow(clippy::too_many_arguments)]
fn student(
    id: &str,
    first_name: &str,
    last_name: &str,
    grade: &str,
    status: StudentStatus,
    enrollment_date: &str,
    parent_name: &str,
    parent_phone: &str,
    address: &str,
) -> Student {
    let initial = last_name.chars().next().unwrap_or('x').to_ascii_lowercase();
    let parent_first = parent_name.split_whitespace().next().unwrap_or(parent_name).to_lowercase();
    Student {
        id: id.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: format!("{}.{initial}@example.com", first_name.to_lowercase()),
        grade: grade.to_owned(),
        status,
        enrollment_date: enrollment_date.to_owned(),
        parent_name: parent_name.to_owned(),
        parent_email: format!("{parent_first}.{initial}@example.com"),
        parent_phone: parent_phone.to_owned(),
        address: address.to_owned(),
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student(
            "1001",
            "Emma",
            "Johnson",
            "10th",
            StudentStatus::Active,
            "2023-09-01",
            "Michael Johnson",
            "(555) 123-4567",
            "123 Main St, Anytown, AN 12345",
        ),
        student(
            "1002",
            "Noah",
            "Williams",
            "9th",
            StudentStatus::Active,
            "2023-09-01",
            "Sarah Williams",
            "(555) 234-5678",
            "456 Oak Ave, Anytown, AN 12345",
        ),
        student(
            "1003",
            "Olivia",
            "Brown",
            "11th",
            StudentStatus::Inactive,
            "2022-09-01",
            "David Brown",
            "(555) 345-6789",
            "789 Pine Rd, Anytown, AN 12345",
        ),
        student(
            "1004",
            "Liam",
            "Davis",
            "12th",
            StudentStatus::Active,
            "2020-09-01",
            "Jennifer Davis",
            "(555) 456-7890",
            "101 Maple Dr, Anytown, AN 12345",
        ),
        student(
            "1005",
            "Ava",
            "Miller",
            "10th",
            StudentStatus::Pending,
            "2023-08-15",
            "Robert Miller",
            "(555) 567-8901",
            "202 Cedar Ln, Anytown, AN 12345",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn class(
    id: &str,
    subject: &str,
    teacher: &str,
    room: &str,
    start_time: &str,
    end_time: &str,
    day: u8,
    color: &str,
    notes: Option<&str>,
) -> ClassSession {
    ClassSession {
        id: id.to_owned(),
        subject: subject.to_owned(),
        teacher: teacher.to_owned(),
        room: room.to_owned(),
        start_time: start_time.to_owned(),
        end_time: end_time.to_owned(),
        day,
        color: color.to_owned(),
        notes: notes.map(str::to_owned),
    }
}

pub fn schedule() -> Vec<ClassSession> {
    vec![
        class("1", "Mathematics", "Prof. Johnson", "Room 101", "08:00", "09:30", 1, "class--blue", None),
        class("2", "Physics", "Dr. Smith", "Lab 3", "10:00", "11:30", 1, "class--green", None),
        class("3", "Literature", "Mrs. Davis", "Room 205", "13:00", "14:30", 2, "class--purple", None),
        class("4", "History", "Mr. Wilson", "Room 108", "09:00", "10:30", 3, "class--yellow", None),
        class(
            "5",
            "Chemistry",
            "Dr. Martinez",
            "Lab 2",
            "14:00",
            "15:30",
            4,
            "class--red",
            Some("Bring lab coat and safety goggles"),
        ),
        class("6", "Physical Education", "Coach Brown", "Gymnasium", "15:00", "16:30", 5, "class--orange", None),
    ]
}

/// Homeroom roster used by the attendance tracker.
pub fn roster() -> Vec<AttendanceEntry> {
    [
        "Emma Thompson",
        "Noah Williams",
        "Olivia Martinez",
        "Liam Johnson",
        "Ava Brown",
        "Sophia Davis",
        "Jackson Miller",
        "Isabella Wilson",
        "Lucas Moore",
        "Mia Taylor",
    ]
    .iter()
    .enumerate()
    .map(|(idx, name)| AttendanceEntry {
        id: (idx + 1).to_string(),
        name: (*name).to_owned(),
        grade: "10A".to_owned(),
        status: None,
        notes: None,
    })
    .collect()
}

/// Classes the attendance tracker can take roll for.
pub fn attendance_classes() -> Vec<String> {
    ["Mathematics - 10A", "Physics - 10A", "Literature - 10A", "History - 10A", "Chemistry - 10A"]
        .iter()
        .map(|name| (*name).to_owned())
        .collect()
}

fn marked(id: &str, name: &str, status: AttendanceStatus, notes: Option<&str>) -> AttendanceEntry {
    AttendanceEntry {
        id: id.to_owned(),
        name: name.to_owned(),
        grade: "10A".to_owned(),
        status: Some(status),
        notes: notes.map(str::to_owned),
    }
}

pub fn attendance_records() -> Vec<AttendanceRecord> {
    use AttendanceStatus::{Absent, Excused, Late, Present};

    vec![
        AttendanceRecord {
            id: "1".to_owned(),
            date: "2023-11-10".to_owned(),
            class_name: "Mathematics - 10A".to_owned(),
            students: vec![
                marked("1", "Emma Thompson", Present, None),
                marked("2", "Noah Williams", Absent, Some("Doctor's appointment")),
                marked("3", "Olivia Martinez", Present, None),
                marked("4", "Liam Johnson", Late, Some("15 minutes late")),
                marked("5", "Ava Brown", Present, None),
            ],
            submitted: true,
        },
        AttendanceRecord {
            id: "2".to_owned(),
            date: "2023-11-09".to_owned(),
            class_name: "Physics - 10A".to_owned(),
            students: vec![
                marked("1", "Emma Thompson", Present, None),
                marked("2", "Noah Williams", Present, None),
                marked("3", "Olivia Martinez", Excused, Some("Family emergency")),
                marked("4", "Liam Johnson", Present, None),
                marked("5", "Ava Brown", Present, None),
            ],
            submitted: true,
        },
    ]
}

fn course(id: &str, name: &str, teacher: &str, progress: u8, next: &str, due: &str) -> Course {
    Course {
        id: id.to_owned(),
        name: name.to_owned(),
        teacher: teacher.to_owned(),
        progress,
        next_assignment: Some(next.to_owned()),
        next_assignment_due: Some(due.to_owned()),
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        course("1", "Mathematics", "Prof. Johnson", 75, "Algebra Quiz", "Tomorrow"),
        course("2", "Physics", "Dr. Smith", 60, "Lab Report", "Friday"),
        course("3", "Literature", "Mrs. Davis", 90, "Essay Submission", "Next Monday"),
        course("4", "History", "Mr. Wilson", 45, "Research Paper", "In 2 weeks"),
    ]
}

fn assessment(id: &str, title: &str, kind: &str, due_date: &str, total_points: u32, status: AssessmentStatus) -> Assessment {
    Assessment {
        id: id.to_owned(),
        title: title.to_owned(),
        kind: kind.to_owned(),
        due_date: due_date.to_owned(),
        total_points,
        status,
    }
}

pub fn assessments() -> Vec<Assessment> {
    vec![
        assessment("1", "Midterm Exam", "Exam", "2023-10-15", 100, AssessmentStatus::Closed),
        assessment("2", "Research Paper", "Assignment", "2023-11-05", 50, AssessmentStatus::Published),
        assessment("3", "Group Project", "Project", "2023-11-20", 75, AssessmentStatus::Published),
        assessment("4", "Final Exam", "Exam", "2023-12-10", 100, AssessmentStatus::Draft),
        assessment("5", "Weekly Quiz 5", "Quiz", "2023-10-28", 20, AssessmentStatus::Published),
    ]
}
