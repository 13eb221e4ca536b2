//! School calendar state: events, the visible window, and filters.
//!
//! DESIGN
//! ======
//! Weeks start on Sunday. The month view is anchored on the first day of a
//! month independent of the selected day, so paging months does not move the
//! selection. Events are single occurrences; there are no recurrence rules.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use time::{Date, Duration, Month};

use crate::util::text::matches_query;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Class,
    Exam,
    Meeting,
    Activity,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [EventKind::Class, EventKind::Exam, EventKind::Meeting, EventKind::Activity];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Class => "class",
            EventKind::Exam => "exam",
            EventKind::Meeting => "meeting",
            EventKind::Activity => "activity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventKind::Class => "Class",
            EventKind::Exam => "Exam",
            EventKind::Meeting => "Meeting",
            EventKind::Activity => "Activity",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: Date,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub kind: EventKind,
    pub description: String,
    pub participants: Vec<String>,
}

/// Event fields edited in the add/edit dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: Date,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub kind: EventKind,
    pub description: String,
}

impl EventDraft {
    pub fn blank(date: Date) -> Self {
        Self {
            title: String::new(),
            date,
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
            kind: EventKind::Class,
            description: String::new(),
        }
    }

    fn from_event(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date,
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            location: event.location.clone(),
            kind: event.kind,
            description: event.description.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
    List,
}

/// Sunday on or before `date`.
pub fn start_of_week(date: Date) -> Date {
    date.saturating_sub(Duration::days(i64::from(date.weekday().number_days_from_sunday())))
}

/// The seven days of the Sunday-started week containing `date`.
pub fn week_days(date: Date) -> Vec<Date> {
    let start = start_of_week(date);
    (0..7).map(|offset| start.saturating_add(Duration::days(offset))).collect()
}

/// First day of the month containing `date`.
pub fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

/// Every day of the month containing `date`.
pub fn month_days(date: Date) -> Vec<Date> {
    let first = first_of_month(date);
    let mut days = vec![first];
    let mut cursor = first;
    while let Some(next) = cursor.next_day() {
        if next.month() != first.month() {
            break;
        }
        days.push(next);
        cursor = next;
    }
    days
}

/// First day of the month `delta` months away from `date`'s month.
pub fn shift_month(date: Date, delta: i32) -> Date {
    let index = date.year() * 12 + i32::from(u8::from(date.month())) - 1 + delta;
    let year = index.div_euclid(12);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let month = Month::try_from(index.rem_euclid(12) as u8 + 1).unwrap_or(Month::January);
    Date::from_calendar_date(year, month, 1).unwrap_or(date)
}

fn same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Events that pass the search, type filter, and the visible window.
pub fn filter_events<'a>(
    events: &'a [CalendarEvent],
    view: CalendarView,
    selected: Date,
    month: Date,
    kind: Option<EventKind>,
    query: &str,
) -> Vec<&'a CalendarEvent> {
    let week_start = start_of_week(selected);
    let week_end = week_start.saturating_add(Duration::days(6));
    events
        .iter()
        .filter(|event| matches_query(&event.title, query))
        .filter(|event| kind.is_none_or(|k| event.kind == k))
        .filter(|event| match view {
            CalendarView::Day => event.date == selected,
            CalendarView::Week => event.date >= week_start && event.date <= week_end,
            CalendarView::Month => same_month(event.date, month),
            CalendarView::List => true,
        })
        .collect()
}

/// Events on `date`, ordered by start time.
pub fn events_on(events: &[CalendarEvent], date: Date) -> Vec<&CalendarEvent> {
    let mut day: Vec<_> = events.iter().filter(|e| e.date == date).collect();
    day.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    day
}

/// Group events by date for the list view, dates ascending.
pub fn group_by_date<'a>(events: &[&'a CalendarEvent]) -> Vec<(Date, Vec<&'a CalendarEvent>)> {
    let mut groups: Vec<(Date, Vec<&'a CalendarEvent>)> = Vec::new();
    for event in events {
        match groups.iter_mut().find(|(date, _)| *date == event.date) {
            Some((_, bucket)) => bucket.push(event),
            None => groups.push((event.date, vec![*event])),
        }
    }
    groups.sort_by_key(|(date, _)| *date);
    for (_, bucket) in &mut groups {
        bucket.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    }
    groups
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    date: Date,
    start_time: &str,
    end_time: &str,
    location: &str,
    kind: EventKind,
    description: &str,
    participants: &[&str],
) -> CalendarEvent {
    CalendarEvent {
        id: id.to_owned(),
        title: title.to_owned(),
        date,
        start_time: start_time.to_owned(),
        end_time: end_time.to_owned(),
        location: location.to_owned(),
        kind,
        description: description.to_owned(),
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

/// Demo events scheduled relative to `today`.
pub fn sample_events(today: Date) -> Vec<CalendarEvent> {
    let day = |offset: i64| today.saturating_add(Duration::days(offset));
    vec![
        event(
            "1",
            "Mathematics Class",
            day(0),
            "08:00",
            "09:30",
            "Room 101",
            EventKind::Class,
            "Algebra and Geometry",
            &["Grade 10A"],
        ),
        event(
            "2",
            "Science Exam",
            day(2),
            "10:00",
            "12:00",
            "Main Hall",
            EventKind::Exam,
            "Mid-term examination",
            &["Grade 10A", "Grade 10B"],
        ),
        event(
            "3",
            "Parent-Teacher Meeting",
            day(1),
            "16:00",
            "18:00",
            "Conference Room",
            EventKind::Meeting,
            "Quarterly progress discussion",
            &["Teachers", "Parents"],
        ),
        event(
            "4",
            "Basketball Tournament",
            day(5),
            "14:00",
            "17:00",
            "School Gymnasium",
            EventKind::Activity,
            "Inter-class basketball tournament",
            &["All Students"],
        ),
        event(
            "5",
            "Literature Club",
            day(3),
            "15:30",
            "17:00",
            "Library",
            EventKind::Activity,
            "Book discussion: To Kill a Mockingbird",
            &["Literature Club Members"],
        ),
    ]
}

/// Calendar page state.
#[derive(Clone, Debug)]
pub struct CalendarState {
    pub events: Vec<CalendarEvent>,
    pub selected: Date,
    /// First day of the month shown in the month view.
    pub month: Date,
    pub view: CalendarView,
    pub kind: Option<EventKind>,
    pub query: String,
    /// Open dialog: `Some((None, draft))` adds, `Some((Some(id), draft))` edits.
    pub dialog: Option<(Option<String>, EventDraft)>,
    /// Why the last save was refused; cleared when the dialog opens or saves.
    pub error: Option<&'static str>,
}

/// Shown when an event is saved without a title.
pub const MISSING_TITLE: &str = "Title is required.";

impl CalendarState {
    pub fn new(today: Date, events: Vec<CalendarEvent>) -> Self {
        Self {
            events,
            selected: today,
            month: first_of_month(today),
            view: CalendarView::default(),
            kind: None,
            query: String::new(),
            dialog: None,
            error: None,
        }
    }

    pub fn visible(&self) -> Vec<&CalendarEvent> {
        filter_events(&self.events, self.view, self.selected, self.month, self.kind, &self.query)
    }

    pub fn select_day(&mut self, date: Date) {
        self.selected = date;
        self.month = first_of_month(date);
    }

    pub fn previous_month(&mut self) {
        self.month = shift_month(self.month, -1);
    }

    pub fn next_month(&mut self) {
        self.month = shift_month(self.month, 1);
    }

    pub fn open_new(&mut self) {
        self.dialog = Some((None, EventDraft::blank(self.selected)));
        self.error = None;
    }

    pub fn open_edit(&mut self, id: &str) {
        if let Some(event) = self.events.iter().find(|e| e.id == id) {
            self.dialog = Some((Some(event.id.clone()), EventDraft::from_event(event)));
            self.error = None;
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.error = None;
    }

    /// Save the open dialog. Blank titles are refused, recorded in `error`,
    /// and keep the dialog open. Returns the id of the saved event.
    pub fn save_dialog(&mut self, new_id: impl FnOnce() -> String) -> Option<String> {
        let (editing, draft) = self.dialog.as_ref()?;
        if draft.title.trim().is_empty() {
            self.error = Some(MISSING_TITLE);
            return None;
        }
        let id = editing.clone().unwrap_or_else(new_id);
        let participants = self
            .events
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.participants.clone())
            .unwrap_or_default();
        let saved = CalendarEvent {
            id: id.clone(),
            title: draft.title.trim().to_owned(),
            date: draft.date,
            start_time: draft.start_time.clone(),
            end_time: draft.end_time.clone(),
            location: draft.location.clone(),
            kind: draft.kind,
            description: draft.description.clone(),
            participants,
        };
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(slot) => *slot = saved,
            None => self.events.push(saved),
        }
        self.dialog = None;
        self.error = None;
        Some(id)
    }

    pub fn delete(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }
}
