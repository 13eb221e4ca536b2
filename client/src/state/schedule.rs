//! Weekly class schedule and the admin schedule builder.
//!
//! DESIGN
//! ======
//! The weekly view is read-only and keyed by weekday (0 = Sunday). Builder
//! items are dated one-offs; saving validates the required fields and either
//! replaces the item being edited or appends a new one.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use time::{Date, Duration};

use crate::net::types::ClassSession;
use crate::util::text::any_matches;

pub const WEEKDAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

pub fn weekday_name(day: u8) -> &'static str {
    WEEKDAY_NAMES.get(usize::from(day)).copied().unwrap_or("Unknown")
}

/// Classes meeting on `day`, earliest first.
pub fn classes_on(classes: &[ClassSession], day: u8) -> Vec<&ClassSession> {
    let mut on_day: Vec<_> = classes.iter().filter(|c| c.day == day).collect();
    on_day.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    on_day
}

/// All classes ordered by weekday, then start time.
pub fn sorted_week(classes: &[ClassSession]) -> Vec<&ClassSession> {
    let mut week: Vec<_> = classes.iter().collect();
    week.sort_by(|a, b| (a.day, &a.start_time).cmp(&(b.day, &b.start_time)));
    week
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Class,
    Exam,
    Meeting,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Class, ItemKind::Exam, ItemKind::Meeting];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Class => "class",
            ItemKind::Exam => "exam",
            ItemKind::Meeting => "meeting",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Class => "Class",
            ItemKind::Exam => "Exam",
            ItemKind::Meeting => "Meeting",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleItem {
    pub id: String,
    pub title: String,
    pub kind: ItemKind,
    pub date: Date,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub participants: Vec<String>,
    pub description: String,
}

/// Form contents of the builder dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub kind: ItemKind,
    pub date: Option<Date>,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    /// Comma-separated.
    pub participants: String,
    pub description: String,
}

impl ItemDraft {
    pub fn blank(date: Date) -> Self {
        Self {
            title: String::new(),
            kind: ItemKind::Class,
            date: Some(date),
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
            participants: String::new(),
            description: String::new(),
        }
    }

    fn from_item(item: &ScheduleItem) -> Self {
        Self {
            title: item.title.clone(),
            kind: item.kind,
            date: Some(item.date),
            start_time: item.start_time.clone(),
            end_time: item.end_time.clone(),
            location: item.location.clone(),
            participants: item.participants.join(", "),
            description: item.description.clone(),
        }
    }
}

/// Why a draft cannot be saved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Date is required")]
    MissingDate,
    #[error("Start and end times are required")]
    MissingTimes,
    #[error("End time must be after start time")]
    EndsBeforeStart,
}

/// Check the required fields and build the item under `id`.
///
/// # Errors
///
/// The first [`DraftError`] found, checked in form order.
pub fn validate(draft: &ItemDraft, id: String) -> Result<ScheduleItem, DraftError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(DraftError::MissingTitle);
    }
    let date = draft.date.ok_or(DraftError::MissingDate)?;
    let (start, end) = (draft.start_time.trim(), draft.end_time.trim());
    if start.is_empty() || end.is_empty() {
        return Err(DraftError::MissingTimes);
    }
    // HH:MM compares correctly as text.
    if end <= start {
        return Err(DraftError::EndsBeforeStart);
    }
    Ok(ScheduleItem {
        id,
        title: title.to_owned(),
        kind: draft.kind,
        date,
        start_time: start.to_owned(),
        end_time: end.to_owned(),
        location: draft.location.trim().to_owned(),
        participants: draft
            .participants
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_owned)
            .collect(),
        description: draft.description.trim().to_owned(),
    })
}

/// Builder list tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuilderTab {
    #[default]
    All,
    Classes,
    Exams,
    Meetings,
}

impl BuilderTab {
    pub const ALL: [BuilderTab; 4] = [BuilderTab::All, BuilderTab::Classes, BuilderTab::Exams, BuilderTab::Meetings];

    pub fn label(self) -> &'static str {
        match self {
            BuilderTab::All => "All",
            BuilderTab::Classes => "Classes",
            BuilderTab::Exams => "Exams",
            BuilderTab::Meetings => "Meetings",
        }
    }

    fn kind(self) -> Option<ItemKind> {
        match self {
            BuilderTab::All => None,
            BuilderTab::Classes => Some(ItemKind::Class),
            BuilderTab::Exams => Some(ItemKind::Exam),
            BuilderTab::Meetings => Some(ItemKind::Meeting),
        }
    }
}

/// Items on `date` (all dates when `None`) in `tab` matching `query` on
/// title, location, or a participant, earliest first.
pub fn filter_items<'a>(
    items: &'a [ScheduleItem],
    date: Option<Date>,
    tab: BuilderTab,
    query: &str,
) -> Vec<&'a ScheduleItem> {
    let mut shown: Vec<_> = items
        .iter()
        .filter(|item| date.is_none_or(|d| item.date == d))
        .filter(|item| tab.kind().is_none_or(|k| item.kind == k))
        .filter(|item| {
            let fields = [item.title.as_str(), item.location.as_str()]
                .into_iter()
                .chain(item.participants.iter().map(String::as_str));
            any_matches(fields, query)
        })
        .collect();
    shown.sort_by(|a, b| (a.date, &a.start_time).cmp(&(b.date, &b.start_time)));
    shown
}

/// Demo builder items relative to `today`.
pub fn sample_items(today: Date) -> Vec<ScheduleItem> {
    let item = |id: &str, title: &str, kind, offset: i64, times: (&str, &str), location: &str, who: &[&str], about: &str| {
        ScheduleItem {
            id: id.to_owned(),
            title: title.to_owned(),
            kind,
            date: today.saturating_add(Duration::days(offset)),
            start_time: times.0.to_owned(),
            end_time: times.1.to_owned(),
            location: location.to_owned(),
            participants: who.iter().map(|p| (*p).to_owned()).collect(),
            description: about.to_owned(),
        }
    };
    vec![
        item(
            "1",
            "Mathematics Class",
            ItemKind::Class,
            0,
            ("09:00", "10:30"),
            "Room 101",
            &["Grade 10A", "Mr. Johnson"],
            "Algebra and Geometry",
        ),
        item(
            "2",
            "Science Exam",
            ItemKind::Exam,
            2,
            ("13:00", "15:00"),
            "Main Hall",
            &["Grade 11B", "Ms. Smith"],
            "Final term examination",
        ),
        item(
            "3",
            "Parent-Teacher Meeting",
            ItemKind::Meeting,
            1,
            ("16:00", "18:00"),
            "Conference Room",
            &["All Teachers", "Parents"],
            "Quarterly progress discussion",
        ),
    ]
}

/// Admin schedule builder state.
#[derive(Clone, Debug)]
pub struct BuilderState {
    pub items: Vec<ScheduleItem>,
    pub date: Option<Date>,
    pub tab: BuilderTab,
    pub query: String,
    /// Open dialog: id of the item being edited (`None` for a new one).
    pub dialog: Option<(Option<String>, ItemDraft)>,
    pub error: Option<DraftError>,
}

impl BuilderState {
    pub fn new(today: Date, items: Vec<ScheduleItem>) -> Self {
        Self { items, date: Some(today), tab: BuilderTab::default(), query: String::new(), dialog: None, error: None }
    }

    pub fn visible(&self) -> Vec<&ScheduleItem> {
        filter_items(&self.items, self.date, self.tab, &self.query)
    }

    pub fn open_new(&mut self, today: Date) {
        self.dialog = Some((None, ItemDraft::blank(self.date.unwrap_or(today))));
        self.error = None;
    }

    pub fn open_edit(&mut self, id: &str) {
        if let Some(item) = self.items.iter().find(|i| i.id == id) {
            self.dialog = Some((Some(item.id.clone()), ItemDraft::from_item(item)));
            self.error = None;
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.error = None;
    }

    /// Validate and store the open draft. On failure the dialog stays open
    /// with `error` set.
    pub fn save(&mut self, new_id: impl FnOnce() -> String) -> Option<String> {
        let (editing, draft) = self.dialog.as_ref()?;
        let id = editing.clone().unwrap_or_else(new_id);
        match validate(draft, id) {
            Ok(item) => {
                let id = item.id.clone();
                match self.items.iter_mut().find(|i| i.id == id) {
                    Some(slot) => *slot = item,
                    None => self.items.push(item),
                }
                self.close_dialog();
                Some(id)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }
}
