use super::*;
use crate::net::mock;
use time::macros::date;

const TODAY: Date = date!(2024 - 05 - 06);

fn builder() -> BuilderState {
    BuilderState::new(TODAY, sample_items(TODAY))
}

fn filled_draft() -> ItemDraft {
    ItemDraft {
        title: "Chess Club".to_owned(),
        kind: ItemKind::Meeting,
        date: Some(TODAY),
        start_time: "15:00".to_owned(),
        end_time: "16:00".to_owned(),
        location: "Library".to_owned(),
        participants: "Chess Club, , Mr. Taylor ".to_owned(),
        description: String::new(),
    }
}

// =============================================================
// Weekly view
// =============================================================

#[test]
fn classes_on_day_sorted_by_start() {
    let classes = mock::schedule();
    let monday: Vec<_> = classes_on(&classes, 1).iter().map(|c| c.subject.clone()).collect();
    assert_eq!(monday, vec!["Mathematics", "Physics"]);
    assert!(classes_on(&classes, 0).is_empty());
}

#[test]
fn week_sorted_by_day_then_start() {
    let classes = mock::schedule();
    let keys: Vec<_> = sorted_week(&classes).iter().map(|c| (c.day, c.start_time.clone())).collect();
    let mut expected = keys.clone();
    expected.sort();
    assert_eq!(keys, expected);
    assert_eq!(keys.len(), 6);
}

#[test]
fn weekday_names() {
    assert_eq!(weekday_name(0), "Sunday");
    assert_eq!(weekday_name(6), "Saturday");
    assert_eq!(weekday_name(9), "Unknown");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_requires_fields_in_order() {
    let mut draft = filled_draft();
    draft.title = " ".to_owned();
    assert_eq!(validate(&draft, "x".to_owned()), Err(DraftError::MissingTitle));

    let mut draft = filled_draft();
    draft.date = None;
    assert_eq!(validate(&draft, "x".to_owned()), Err(DraftError::MissingDate));

    let mut draft = filled_draft();
    draft.end_time.clear();
    assert_eq!(validate(&draft, "x".to_owned()), Err(DraftError::MissingTimes));

    let mut draft = filled_draft();
    draft.end_time = "14:00".to_owned();
    assert_eq!(validate(&draft, "x".to_owned()), Err(DraftError::EndsBeforeStart));
}

#[test]
fn validate_splits_participants() {
    let item = validate(&filled_draft(), "x".to_owned()).unwrap();
    assert_eq!(item.participants, vec!["Chess Club", "Mr. Taylor"]);
}

// =============================================================
// Builder
// =============================================================

#[test]
fn filters_by_date_tab_and_search() {
    let state = builder();
    assert_eq!(state.visible().len(), 1);
    assert!(filter_items(&state.items, Some(TODAY), BuilderTab::Exams, "").is_empty());
    assert_eq!(filter_items(&state.items, None, BuilderTab::All, "").len(), 3);
    let hits = filter_items(&state.items, None, BuilderTab::All, "parents");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "3");
}

#[test]
fn save_new_item_appends() {
    let mut state = builder();
    state.open_new(TODAY);
    if let Some((_, draft)) = state.dialog.as_mut() {
        *draft = filled_draft();
    }
    assert_eq!(state.save(|| "new-1".to_owned()), Some("new-1".to_owned()));
    assert!(state.dialog.is_none());
    assert_eq!(state.visible().len(), 2);
}

#[test]
fn failed_save_keeps_dialog_with_error() {
    let mut state = builder();
    state.open_new(TODAY);
    assert_eq!(state.save(|| "new-1".to_owned()), None);
    assert_eq!(state.error, Some(DraftError::MissingTitle));
    assert!(state.dialog.is_some());
    assert_eq!(state.items.len(), 3);
}

#[test]
fn edit_replaces_and_delete_removes() {
    let mut state = builder();
    state.open_edit("1");
    if let Some((_, draft)) = state.dialog.as_mut() {
        draft.location = "Room 202".to_owned();
    }
    assert_eq!(state.save(|| unreachable!()), Some("1".to_owned()));
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.items[0].location, "Room 202");
    assert_eq!(state.items[0].participants, vec!["Grade 10A", "Mr. Johnson"]);

    state.delete("1");
    assert!(state.visible().is_empty());
}
