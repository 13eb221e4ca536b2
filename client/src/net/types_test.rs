use super::*;

fn sample_user() -> User {
    User {
        id: "teacher-1".to_owned(),
        email: "sarah@example.com".to_owned(),
        name: "Sarah Davis".to_owned(),
        role: Role::Teacher,
        avatar: None,
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    let parsed: Role = serde_json::from_str("\"parent\"").unwrap();
    assert_eq!(parsed, Role::Parent);
}

#[test]
fn role_dashboard_path_uses_role_name() {
    assert_eq!(Role::Student.dashboard_path(), "/dashboard/student");
    assert_eq!(Role::Teacher.dashboard_path(), "/dashboard/teacher");
    assert_eq!(Role::Parent.dashboard_path(), "/dashboard/parent");
    assert_eq!(Role::Admin.dashboard_path(), "/dashboard/admin");
}

#[test]
fn role_from_str_accepts_known_names_only() {
    assert_eq!("teacher".parse::<Role>(), Ok(Role::Teacher));
    assert!("principal".parse::<Role>().is_err());
    assert!("Teacher".parse::<Role>().is_err());
}

#[test]
fn role_all_lists_each_role_once() {
    assert_eq!(Role::ALL.len(), 4);
    for role in Role::ALL {
        assert_eq!(Role::ALL.iter().filter(|r| **r == role).count(), 1);
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_omits_missing_avatar() {
    let json = serde_json::to_value(sample_user()).unwrap();
    assert!(json.get("avatar").is_none());
    assert_eq!(json["role"], "teacher");
}

#[test]
fn user_deserializes_without_avatar() {
    let user: User = serde_json::from_str(
        r#"{"id":"admin-1","email":"a@b.c","name":"Admin User","role":"admin"}"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(user.avatar.is_none());
}

#[test]
fn user_initials_take_first_two_words() {
    assert_eq!(sample_user().initials(), "SD");
    let mut single = sample_user();
    single.name = "madonna".to_owned();
    assert_eq!(single.initials(), "M");
}

// =============================================================
// School records
// =============================================================

#[test]
fn grade_entry_percent_handles_zero_max() {
    let mut entry = GradeEntry {
        id: "g1".to_owned(),
        student_id: "1001".to_owned(),
        course_id: "1".to_owned(),
        assignment_id: "2".to_owned(),
        score: 42.0,
        max_score: 50.0,
        feedback: None,
        date: "2023-11-05".to_owned(),
    };
    assert_eq!(entry.percent(), Some(84.0));
    entry.max_score = 0.0;
    assert_eq!(entry.percent(), None);
}

#[test]
fn attendance_record_uses_class_key() {
    let record = AttendanceRecord {
        id: "1".to_owned(),
        date: "2023-11-10".to_owned(),
        class_name: "Mathematics - 10A".to_owned(),
        students: Vec::new(),
        submitted: true,
    };
    let json = serde_json::to_value(record).unwrap();
    assert_eq!(json["class"], "Mathematics - 10A");
}

#[test]
fn assessment_kind_serializes_as_type() {
    let assessment = Assessment {
        id: "1".to_owned(),
        title: "Midterm Exam".to_owned(),
        kind: "Exam".to_owned(),
        due_date: "2023-10-15".to_owned(),
        total_points: 100,
        status: AssessmentStatus::Closed,
    };
    let json = serde_json::to_value(assessment).unwrap();
    assert_eq!(json["type"], "Exam");
    assert_eq!(json["dueDate"], "2023-10-15");
    assert_eq!(json["status"], "closed");
}
