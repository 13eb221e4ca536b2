//! Admin schedule builder: dated classes, exams, and meetings.

use leptos::prelude::*;

use crate::net::api::new_record_id;
use crate::state::schedule::{self, BuilderState, BuilderTab, ItemDraft, ItemKind};
use crate::util::clock;

#[component]
fn ItemDialog(builder: RwSignal<BuilderState>) -> impl IntoView {
    let field = move |read: fn(&ItemDraft) -> String| {
        move || builder.with(|b| b.dialog.as_ref().map(|(_, d)| read(d)).unwrap_or_default())
    };
    let edit = move |write: fn(&mut ItemDraft, String), value: String| {
        builder.update(|b| {
            if let Some((_, draft)) = b.dialog.as_mut() {
                write(draft, value);
            }
        });
    };
    let editing = move || builder.with(|b| b.dialog.as_ref().is_some_and(|(id, _)| id.is_some()));

    view! {
        <div class="dialog-backdrop" on:click=move |_| builder.update(BuilderState::close_dialog)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if editing() { "Edit Schedule Item" } else { "Add Schedule Item" }}</h2>
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
                        on:change=move |ev| {
                            edit(
                                |d, v| {
                                    if let Some(kind) = ItemKind::parse(&v) {
                                        d.kind = kind;
                                    }
                                },
                                event_target_value(&ev),
                            );
                        }
                    >
                        {ItemKind::ALL
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
                        prop:value=field(|d| d.date.map(clock::format_iso).unwrap_or_default())
                        on:input=move |ev| edit(|d, v| d.date = clock::parse_iso(&v), event_target_value(&ev))
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
                    "Participants (comma separated)"
                    <input
                        class="dialog__input"
                        prop:value=field(|d| d.participants.clone())
                        on:input=move |ev| edit(|d, v| d.participants = v, event_target_value(&ev))
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
                {move || builder.with(|b| b.error).map(|e| view! { <p class="dialog__error">{e.to_string()}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| builder.update(BuilderState::close_dialog)>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            builder.update(|b| {
                                if let Some(id) = b.save(new_record_id) {
                                    log::debug!("schedule item saved id={id}");
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
pub fn ScheduleBuilderPage() -> impl IntoView {
    let today = clock::today();
    let builder = RwSignal::new(BuilderState::new(today, schedule::sample_items(today)));

    let items = move || {
        let shown: Vec<_> = builder.with(|b| b.visible().into_iter().cloned().collect());
        if shown.is_empty() {
            return view! { <p class="card__empty">"No items scheduled for this selection."</p> }.into_any();
        }
        shown
            .into_iter()
            .map(|item| {
                let edit_id = item.id.clone();
                let delete_id = item.id.clone();
                view! {
                    <div class=format!("builder-item builder-item--{}", item.kind.as_str())>
                        <div class="builder-item__head">
                            <strong>{item.title}</strong>
                            <span class="badge">{item.kind.label()}</span>
                        </div>
                        <p>
                            {clock::format_long(item.date)} ", " {item.start_time} " - " {item.end_time}
                        </p>
                        <p>{item.location}</p>
                        <p class="builder-item__people">{item.participants.join(", ")}</p>
                        <div class="builder-item__actions">
                            <button class="btn btn--small" on:click=move |_| builder.update(|b| b.open_edit(&edit_id))>
                                "Edit"
                            </button>
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| builder.update(|b| b.delete(&delete_id))
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="builder-page">
            <div class="builder-page__toolbar">
                <input
                    type="date"
                    prop:value=move || builder.with(|b| b.date.map(clock::format_iso).unwrap_or_default())
                    on:input=move |ev| builder.update(|b| b.date = clock::parse_iso(&event_target_value(&ev)))
                />
                <button class="btn" on:click=move |_| builder.update(|b| b.date = None)>"All dates"</button>
                <input
                    type="search"
                    placeholder="Search items..."
                    prop:value=move || builder.with(|b| b.query.clone())
                    on:input=move |ev| builder.update(|b| b.query = event_target_value(&ev))
                />
                <span class="toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| builder.update(|b| b.open_new(today))>
                    "+ Add Item"
                </button>
            </div>
            <div class="segmented">
                {BuilderTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="segmented__item"
                                class:segmented__item--active=move || builder.with(|b| b.tab == t)
                                on:click=move |_| builder.update(|b| b.tab = t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="builder-page__items">{items}</div>
            <Show when=move || builder.with(|b| b.dialog.is_some())>
                <ItemDialog builder/>
            </Show>
        </div>
    }
}
