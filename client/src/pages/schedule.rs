//! Weekly class schedule, shown as a day-by-day grid or a single day list.

use leptos::prelude::*;

use crate::net::types::ClassSession;
use crate::state::schedule::{WEEKDAY_NAMES, classes_on, sorted_week, weekday_name};
use crate::util::clock;

fn class_card(class: &ClassSession, selected: RwSignal<Option<ClassSession>>) -> impl IntoView + use<> {
    let picked = class.clone();
    view! {
        <button class=format!("class-card {}", class.color) on:click=move |_| selected.set(Some(picked.clone()))>
            <strong class="class-card__subject">{class.subject.clone()}</strong>
            <span class="class-card__time">{format!("{} - {}", class.start_time, class.end_time)}</span>
            <span class="class-card__room">{class.room.clone()}</span>
        </button>
    }
}

#[component]
pub fn SchedulePage() -> impl IntoView {
    let classes = LocalResource::new(crate::net::api::fetch_schedule);
    let day = RwSignal::new(clock::today().weekday().number_days_from_sunday());
    let week_mode = RwSignal::new(true);
    let selected = RwSignal::new(None::<ClassSession>);

    let week_grid = move |list: &[ClassSession]| {
        (1u8..=5)
            .map(|weekday| {
                let cards = classes_on(list, weekday).into_iter().map(|c| class_card(c, selected)).collect_view();
                view! {
                    <div class="week-grid__column">
                        <h3>{weekday_name(weekday)}</h3>
                        {cards}
                    </div>
                }
            })
            .collect_view()
    };

    let day_list = move |list: &[ClassSession]| {
        let on_day = classes_on(list, day.get());
        if on_day.is_empty() {
            return view! { <p class="card__empty">"No classes scheduled."</p> }.into_any();
        }
        on_day.into_iter().map(|c| class_card(c, selected)).collect_view().into_any()
    };

    view! {
        <div class="schedule-page">
            <div class="schedule-page__toolbar">
                <div class="segmented">
                    <button
                        class="segmented__item"
                        class:segmented__item--active=move || week_mode.get()
                        on:click=move |_| week_mode.set(true)
                    >
                        "Week"
                    </button>
                    <button
                        class="segmented__item"
                        class:segmented__item--active=move || !week_mode.get()
                        on:click=move |_| week_mode.set(false)
                    >
                        "Day"
                    </button>
                </div>
                <Show when=move || !week_mode.get()>
                    <select on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                            day.set(value);
                        }
                    }>
                        {WEEKDAY_NAMES
                            .iter()
                            .enumerate()
                            .map(|(idx, name)| {
                                let idx = u8::try_from(idx).unwrap_or_default();
                                view! {
                                    <option value=idx.to_string() selected=move || day.get() == idx>
                                        {*name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </Show>
            </div>
            <Suspense fallback=move || view! { <p>"Loading schedule..."</p> }>
                {move || {
                    classes
                        .get()
                        .map(|list| {
                            if week_mode.get() {
                                view! { <div class="week-grid">{week_grid(&list)}</div> }.into_any()
                            } else {
                                view! { <div class="day-list">{day_list(&list)}</div> }.into_any()
                            }
                        })
                }}
            </Suspense>
            {move || {
                selected
                    .get()
                    .map(|class| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
                                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                    <h2>{class.subject.clone()}</h2>
                                    <p>{weekday_name(class.day)} ", " {class.start_time.clone()} " - " {class.end_time.clone()}</p>
                                    <p>"Teacher: " {class.teacher.clone()}</p>
                                    <p>"Room: " {class.room.clone()}</p>
                                    {class.notes.clone().map(|n| view! { <p class="dialog__note">{n}</p> })}
                                    <button class="btn" on:click=move |_| selected.set(None)>"Close"</button>
                                </div>
                            </div>
                        }
                    })
            }}
            <section class="card">
                <h2 class="card__title">"This week"</h2>
                <Suspense fallback=|| ()>
                    {move || {
                        classes
                            .get()
                            .map(|list| {
                                sorted_week(&list)
                                    .into_iter()
                                    .map(|c| {
                                        view! {
                                            <div class="list-row">
                                                <span>{weekday_name(c.day)}</span>
                                                <span>{c.start_time.clone()}</span>
                                                <span>{c.subject.clone()}</span>
                                                <span>{c.room.clone()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
