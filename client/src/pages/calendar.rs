//! School calendar page: month/week/day/list views with an event dialog.

use leptos::prelude::*;
use time::Date;

use crate::state::calendar::{
    self, CalendarEvent, CalendarState, CalendarView, EventKind, events_on, group_by_date, month_days, week_days,
};
use crate::util::clock;

const VIEWS: [(CalendarView, &str); 4] = [
    (CalendarView::Month, "Month"),
    (CalendarView::Week, "Week"),
    (CalendarView::Day, "Day"),
    (CalendarView::List, "List"),
];

fn event_chip(event: &CalendarEvent, cal: RwSignal<CalendarState>) -> impl IntoView + use<> {
    let id = event.id.clone();
    view! {
        <button
            class=format!("event-chip event-chip--{}", event.kind.as_str())
            on:click=move |_| cal.update(|c| c.open_edit(&id))
        >
            <span class="event-chip__time">{event.start_time.clone()}</span>
            <span class="event-chip__title">{event.title.clone()}</span>
        </button>
    }
}

fn day_cell(day: Date, cal: RwSignal<CalendarState>, today: Date) -> impl IntoView + use<> {
    let chips = move || {
        cal.with(|c| {
            let visible: Vec<CalendarEvent> = c.visible().into_iter().cloned().collect();
            events_on(&visible, day).into_iter().map(|e| event_chip(e, cal)).collect_view()
        })
    };
    view! {
        <div
            class="calendar__cell"
            class:calendar__cell--today={day == today}
            class:calendar__cell--selected=move || cal.with(|c| c.selected == day)
            on:click=move |_| cal.update(|c| c.select_day(day))
        >
            <span class="calendar__day-number">{day.day()}</span>
            {chips}
        </div>
    }
}

#[component]
fn EventDialog(cal: RwSignal<CalendarState>) -> impl IntoView {
    let field = move |read: fn(&calendar::EventDraft) -> String| {
        move || cal.with(|c| c.dialog.as_ref().map(|(_, d)| read(d)).unwrap_or_default())
    };
    let edit = move |write: fn(&mut calendar::EventDraft, String), value: String| {
        cal.update(|c| {
            if let Some((_, draft)) = c.dialog.as_mut() {
                write(draft, value);
            }
        });
    };
    let editing_id = move || cal.with(|c| c.dialog.as_ref().and_then(|(id, _)| id.clone()));

    view! {
        <div class="dialog-backdrop" on:click=move |_| cal.update(CalendarState::close_dialog)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if editing_id().is_some() { "Edit Event" } else { "Add Event" }}</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        prop:value=field(|d| d.title.clone())
                        on:input=move |ev| edit(|d, v| d.title = v, event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        prop:value=field(|d| d.kind.as_str().to_owned())
                        on:change=move |ev| edit(|d, v| {
                            if let Some(kind) = EventKind::parse(&v) {
                                d.kind = kind;
                            }
                        }, event_target_value(&ev))
                    >
                        {EventKind::ALL
                            .into_iter()
                            .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=field(|d| clock::format_iso(d.date))
                        on:input=move |ev| edit(|d, v| {
                            if let Some(date) = clock::parse_iso(&v) {
                                d.date = date;
                            }
                        }, event_target_value(&ev))
                    />
                </label>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Start"
                        <input
                            class="dialog__input"
                            type="time"
                            prop:value=field(|d| d.start_time.clone())
                            on:input=move |ev| edit(|d, v| d.start_time = v, event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "End"
                        <input
                            class="dialog__input"
                            type="time"
                            prop:value=field(|d| d.end_time.clone())
                            on:input=move |ev| edit(|d, v| d.end_time = v, event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="dialog__label">
                    "Location"
                    <input
                        class="dialog__input"
                        prop:value=field(|d| d.location.clone())
                        on:input=move |ev| edit(|d, v| d.location = v, event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=field(|d| d.description.clone())
                        on:input=move |ev| edit(|d, v| d.description = v, event_target_value(&ev))
                    ></textarea>
                </label>
                {move || cal.with(|c| c.error).map(|e| view! { <p class="dialog__error">{e}</p> })}
                <div class="dialog__actions">
                    <Show when=move || editing_id().is_some()>
                        <button
                            class="btn btn--danger"
                            on:click=move |_| {
                                if let Some(id) = editing_id() {
                                    cal.update(|c| {
                                        c.delete(&id);
                                        c.close_dialog();
                                    });
                                }
                            }
                        >
                            "Delete"
                        </button>
                    </Show>
                    <button class="btn" on:click=move |_| cal.update(CalendarState::close_dialog)>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            cal.update(|c| {
                                if let Some(id) = c.save_dialog(crate::net::api::new_record_id) {
                                    log::debug!("calendar event saved id={id}");
                                }
                            });
                        }
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let today = clock::today();
    let cal = RwSignal::new(CalendarState::new(today, calendar::sample_events(today)));

    let heading = move || {
        cal.with(|c| match c.view {
            CalendarView::Month => format!("{} {}", c.month.month(), c.month.year()),
            CalendarView::Week => {
                let days = week_days(c.selected);
                format!("{} – {}", clock::format_short(days[0]), clock::format_short(days[6]))
            }
            CalendarView::Day => clock::format_long(c.selected),
            CalendarView::List => "All events".to_owned(),
        })
    };

    let body = move || {
        let view_kind = cal.with(|c| c.view);
        match view_kind {
            CalendarView::Month => {
                let month = cal.with(|c| c.month);
                let days = month_days(month);
                let lead = days.first().map_or(0, |d| d.weekday().number_days_from_sunday());
                view! {
                    <div class="calendar__grid">
                        {crate::state::schedule::WEEKDAY_NAMES
                            .iter()
                            .map(|name| view! { <div class="calendar__weekday">{name.chars().take(3).collect::<String>()}</div> })
                            .collect_view()}
                        {(0..lead).map(|_| view! { <div class="calendar__cell calendar__cell--blank"></div> }).collect_view()}
                        {days.into_iter().map(|day| day_cell(day, cal, today)).collect_view()}
                    </div>
                }
                .into_any()
            }
            CalendarView::Week => {
                let days = week_days(cal.with(|c| c.selected));
                view! {
                    <div class="calendar__week">
                        {days.into_iter().map(|day| day_cell(day, cal, today)).collect_view()}
                    </div>
                }
                .into_any()
            }
            CalendarView::Day | CalendarView::List => {
                let groups = cal.with(|c| {
                    group_by_date(&c.visible())
                        .into_iter()
                        .map(|(date, events)| (date, events.into_iter().cloned().collect::<Vec<_>>()))
                        .collect::<Vec<_>>()
                });
                if groups.is_empty() {
                    return view! { <p class="card__empty">"No events found."</p> }.into_any();
                }
                groups
                    .into_iter()
                    .map(|(date, events)| {
                        view! {
                            <section class="calendar__group">
                                <h3>{clock::format_long(date)}</h3>
                                {events.iter().map(|e| event_chip(e, cal)).collect_view()}
                            </section>
                        }
                    })
                    .collect_view()
                    .into_any()
            }
        }
    };

    view! {
        <div class="calendar-page">
            <div class="calendar-page__toolbar">
                <button class="btn" on:click=move |_| cal.update(CalendarState::previous_month)>"‹"</button>
                <h2 class="calendar-page__heading">{heading}</h2>
                <button class="btn" on:click=move |_| cal.update(CalendarState::next_month)>"›"</button>
                <button class="btn" on:click=move |_| cal.update(|c| c.select_day(today))>"Today"</button>
                <span class="toolbar__spacer"></span>
                <input
                    class="calendar-page__search"
                    type="search"
                    placeholder="Search events..."
                    prop:value=move || cal.with(|c| c.query.clone())
                    on:input=move |ev| cal.update(|c| c.query = event_target_value(&ev))
                />
                <select on:change=move |ev| cal.update(|c| c.kind = EventKind::parse(&event_target_value(&ev)))>
                    <option value="all">"All types"</option>
                    {EventKind::ALL
                        .into_iter()
                        .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                        .collect_view()}
                </select>
                <div class="segmented">
                    {VIEWS
                        .into_iter()
                        .map(|(view_kind, label)| {
                            view! {
                                <button
                                    class="segmented__item"
                                    class:segmented__item--active=move || cal.with(|c| c.view == view_kind)
                                    on:click=move |_| cal.update(|c| c.view = view_kind)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="btn btn--primary" on:click=move |_| cal.update(CalendarState::open_new)>
                    "+ Add Event"
                </button>
            </div>
            {body}
            <Show when=move || cal.with(|c| c.dialog.is_some())>
                <EventDialog cal/>
            </Show>
        </div>
    }
}
