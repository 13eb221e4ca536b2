//! Attendance tracker: take roll for a class and browse submitted records.

use leptos::prelude::*;

use crate::net::mock;
use crate::net::types::{AttendanceRecord, AttendanceStatus};
use crate::state::attendance::{AttendanceState, AttendanceSummary, absentees};
use crate::util::clock;

#[component]
fn SummaryBar(summary: Signal<AttendanceSummary>) -> impl IntoView {
    let cell = move |label: &'static str, pick: fn(&AttendanceSummary) -> usize| {
        view! {
            <div class="summary-bar__cell">
                <span class="summary-bar__value">{move || pick(&summary.get())}</span>
                <span class="summary-bar__label">{label}</span>
            </div>
        }
    };
    view! {
        <div class="summary-bar">
            {cell("Present", |s| s.present)}
            {cell("Absent", |s| s.absent)}
            {cell("Late", |s| s.late)}
            {cell("Excused", |s| s.excused)}
            {cell("Unmarked", |s| s.unmarked)}
        </div>
    }
}

#[component]
fn RollCall(roll: RwSignal<AttendanceState>, history: RwSignal<Vec<AttendanceRecord>>) -> impl IntoView {
    let submitting = RwSignal::new(false);

    let rows = move || {
        roll.with(|r| {
            r.filtered()
                .into_iter()
                .map(|entry| {
                    let id = entry.id.clone();
                    let note_id = entry.id.clone();
                    let current = entry.status;
                    let buttons = AttendanceStatus::ALL
                        .into_iter()
                        .map(|status| {
                            let id = id.clone();
                            view! {
                                <button
                                    class=format!("status-btn status-btn--{}", status.label().to_lowercase())
                                    class:status-btn--active=current == Some(status)
                                    on:click=move |_| roll.update(|r| r.set_status(&id, status))
                                >
                                    {status.label()}
                                </button>
                            }
                        })
                        .collect_view();
                    view! {
                        <tr>
                            <td>{entry.name.clone()}</td>
                            <td>{entry.grade.clone()}</td>
                            <td class="status-group">{buttons}</td>
                            <td>
                                <input
                                    class="table__input"
                                    placeholder="Notes"
                                    prop:value=entry.notes.clone().unwrap_or_default()
                                    on:change=move |ev| roll.update(|r| r.set_note(&note_id, &event_target_value(&ev)))
                                />
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let on_submit = move |_| {
        if submitting.get() {
            return;
        }
        let (class_name, entries) = roll.with(|r| (r.class_name.clone(), r.entries.clone()));
        submitting.set(true);
        let finish = move |accepted: bool| {
            submitting.set(false);
            if !accepted {
                return;
            }
            roll.update(|r| r.submitted = true);
            let record = roll.with(|r| r.to_record(crate::net::api::new_record_id(), clock::format_iso(clock::today())));
            history.update(|h| h.insert(0, record));
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let accepted = crate::net::api::submit_attendance(&class_name, &entries).await;
            finish(accepted);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (class_name, entries);
            finish(true);
        }
    };

    let summary = Signal::derive(move || roll.with(AttendanceState::summary));

    view! {
        <div class="roll-call">
            <div class="roll-call__toolbar">
                <select on:change=move |ev| roll.update(|r| r.select_class(&event_target_value(&ev)))>
                    {move || {
                        roll.with(|r| {
                            r.classes
                                .iter()
                                .map(|c| {
                                    let selected = *c == r.class_name;
                                    view! { <option value=c.clone() selected=selected>{c.clone()}</option> }
                                })
                                .collect_view()
                        })
                    }}
                </select>
                <input
                    type="search"
                    placeholder="Search students..."
                    prop:value=move || roll.with(|r| r.query.clone())
                    on:input=move |ev| roll.update(|r| r.query = event_target_value(&ev))
                />
                <span class="toolbar__spacer"></span>
                <button class="btn" on:click=move |_| roll.update(|r| r.mark_all(AttendanceStatus::Present))>
                    "Mark all present"
                </button>
            </div>
            <SummaryBar summary/>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Student"</th>
                        <th>"Class"</th>
                        <th>"Status"</th>
                        <th>"Notes"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <div class="roll-call__actions">
                <Show when=move || roll.with(|r| r.submitted)>
                    <span class="roll-call__done">"Attendance submitted."</span>
                </Show>
                <button class="btn btn--primary" disabled=move || submitting.get() on:click=on_submit>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Attendance" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn History(history: RwSignal<Vec<AttendanceRecord>>) -> impl IntoView {
    move || {
        history.with(|records| {
            records
                .iter()
                .map(|record| {
                    let summary = AttendanceSummary::of(&record.students);
                    let absent: Vec<String> = absentees(record).into_iter().map(|e| e.name.clone()).collect();
                    view! {
                        <section class="card">
                            <h3 class="card__title">{record.class_name.clone()} " · " {record.date.clone()}</h3>
                            <p>
                                {format!(
                                    "Present {} · Absent {} · Late {} · Excused {}",
                                    summary.present,
                                    summary.absent,
                                    summary.late,
                                    summary.excused,
                                )}
                            </p>
                            {(!absent.is_empty()).then(|| view! { <p class="card__note">"Absent: " {absent.join(", ")}</p> })}
                        </section>
                    }
                })
                .collect_view()
        })
    }
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let roll = RwSignal::new(AttendanceState::new(mock::attendance_classes(), mock::roster()));
    let history = RwSignal::new(Vec::<AttendanceRecord>::new());
    let records = LocalResource::new(crate::net::api::fetch_attendance_records);
    Effect::new(move || {
        if let Some(list) = records.get() {
            history.update(|h| h.extend(list));
        }
    });
    let show_history = RwSignal::new(false);

    view! {
        <div class="attendance-page">
            <div class="segmented">
                <button
                    class="segmented__item"
                    class:segmented__item--active=move || !show_history.get()
                    on:click=move |_| show_history.set(false)
                >
                    "Take Attendance"
                </button>
                <button
                    class="segmented__item"
                    class:segmented__item--active=move || show_history.get()
                    on:click=move |_| show_history.set(true)
                >
                    "Attendance History"
                </button>
            </div>
            <Show when=move || show_history.get() fallback=move || view! { <RollCall roll history/> }>
                <History history/>
            </Show>
        </div>
    }
}
