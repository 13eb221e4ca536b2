use super::*;
use time::macros::date;

// 2024-03-13 is a Wednesday.
const TODAY: Date = date!(2024 - 03 - 13);

fn state() -> CalendarState {
    CalendarState::new(TODAY, sample_events(TODAY))
}

fn titles(events: &[&CalendarEvent]) -> Vec<String> {
    events.iter().map(|e| e.title.clone()).collect()
}

// =============================================================
// Date math
// =============================================================

#[test]
fn week_starts_on_sunday() {
    assert_eq!(start_of_week(TODAY), date!(2024 - 03 - 10));
    assert_eq!(start_of_week(date!(2024 - 03 - 10)), date!(2024 - 03 - 10));
    let week = week_days(TODAY);
    assert_eq!(week.len(), 7);
    assert_eq!(week[6], date!(2024 - 03 - 16));
}

#[test]
fn month_days_cover_whole_month() {
    assert_eq!(month_days(date!(2024 - 02 - 20)).len(), 29);
    assert_eq!(month_days(date!(2023 - 02 - 01)).len(), 28);
    assert_eq!(month_days(TODAY)[0], date!(2024 - 03 - 01));
}

#[test]
fn shift_month_crosses_years() {
    assert_eq!(shift_month(date!(2024 - 01 - 31), -1), date!(2023 - 12 - 01));
    assert_eq!(shift_month(date!(2024 - 12 - 05), 1), date!(2025 - 01 - 01));
    assert_eq!(shift_month(TODAY, 0), date!(2024 - 03 - 01));
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn day_view_shows_only_selected_day() {
    let events = sample_events(TODAY);
    let day = filter_events(&events, CalendarView::Day, TODAY, TODAY, None, "");
    assert_eq!(titles(&day), vec!["Mathematics Class"]);
}

#[test]
fn week_view_uses_sunday_window() {
    let events = sample_events(TODAY);
    // +5 days lands on Monday of the following week.
    let week = filter_events(&events, CalendarView::Week, TODAY, TODAY, None, "");
    assert_eq!(week.len(), 4);
    assert!(!titles(&week).contains(&"Basketball Tournament".to_owned()));
}

#[test]
fn kind_and_search_filters_combine() {
    let events = sample_events(TODAY);
    let activities = filter_events(&events, CalendarView::List, TODAY, TODAY, Some(EventKind::Activity), "");
    assert_eq!(activities.len(), 2);
    let club = filter_events(&events, CalendarView::List, TODAY, TODAY, Some(EventKind::Activity), "CLUB");
    assert_eq!(titles(&club), vec!["Literature Club"]);
}

#[test]
fn month_view_follows_displayed_month() {
    let mut cal = state();
    assert_eq!(cal.visible().len(), 5);
    cal.next_month();
    assert!(cal.visible().is_empty());
    assert_eq!(cal.selected, TODAY);
}

#[test]
fn group_by_date_orders_dates() {
    let events = sample_events(TODAY);
    let all: Vec<_> = events.iter().collect();
    let groups = group_by_date(&all);
    let dates: Vec<_> = groups.iter().map(|(d, _)| *d).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(groups.len(), 5);
}

// =============================================================
// Editing
// =============================================================

#[test]
fn save_new_event_uses_fresh_id() {
    let mut cal = state();
    cal.open_new();
    if let Some((_, draft)) = cal.dialog.as_mut() {
        draft.title = "Staff Lunch".to_owned();
        draft.kind = EventKind::Meeting;
    }
    let id = cal.save_dialog(|| "ev-9".to_owned()).unwrap();
    assert_eq!(id, "ev-9");
    assert!(cal.dialog.is_none());
    assert_eq!(cal.events.len(), 6);
    assert_eq!(events_on(&cal.events, TODAY).len(), 2);
}

#[test]
fn blank_title_keeps_dialog_open() {
    let mut cal = state();
    cal.open_new();
    assert_eq!(cal.save_dialog(|| "x".to_owned()), None);
    assert!(cal.dialog.is_some());
    assert_eq!(cal.error, Some(MISSING_TITLE));
    assert_eq!(cal.events.len(), 5);

    if let Some((_, draft)) = cal.dialog.as_mut() {
        draft.title = "Chess Club".to_owned();
    }
    assert_eq!(cal.save_dialog(|| "x".to_owned()), Some("x".to_owned()));
    assert_eq!(cal.error, None);
}

#[test]
fn reopening_dialog_clears_refusal() {
    let mut cal = state();
    cal.open_new();
    let _ = cal.save_dialog(|| "x".to_owned());
    assert!(cal.error.is_some());
    cal.close_dialog();
    assert_eq!(cal.error, None);

    cal.open_new();
    let _ = cal.save_dialog(|| "x".to_owned());
    cal.open_edit("2");
    assert_eq!(cal.error, None);
}

#[test]
fn edit_replaces_in_place_and_delete_removes() {
    let mut cal = state();
    cal.open_edit("2");
    if let Some((_, draft)) = cal.dialog.as_mut() {
        draft.location = "Gym".to_owned();
    }
    assert_eq!(cal.save_dialog(|| unreachable!()), Some("2".to_owned()));
    let exam = cal.events.iter().find(|e| e.id == "2").unwrap();
    assert_eq!(exam.location, "Gym");
    assert_eq!(exam.participants.len(), 2);

    cal.delete("2");
    assert_eq!(cal.events.len(), 4);
}

#[test]
fn event_kind_parses_its_own_name() {
    for kind in EventKind::ALL {
        assert_eq!(EventKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(EventKind::parse("party"), None);
}
