//! Student records manager for administrators.

use leptos::prelude::*;

use crate::net::types::Student;
use crate::state::records::{StudentTab, filter_students, status_counts};

#[component]
fn StudentDetail(student: RwSignal<Option<Student>>) -> impl IntoView {
    move || {
        student.get().map(|s| {
            view! {
                <div class="dialog-backdrop" on:click=move |_| student.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>{s.full_name()}</h2>
                        <dl class="detail-list">
                            <dt>"Student ID"</dt>
                            <dd>{s.id.clone()}</dd>
                            <dt>"Email"</dt>
                            <dd>{s.email.clone()}</dd>
                            <dt>"Grade"</dt>
                            <dd>{s.grade.clone()}</dd>
                            <dt>"Status"</dt>
                            <dd>{s.status.label()}</dd>
                            <dt>"Enrolled"</dt>
                            <dd>{s.enrollment_date.clone()}</dd>
                            <dt>"Address"</dt>
                            <dd>{s.address.clone()}</dd>
                            <dt>"Parent"</dt>
                            <dd>{s.parent_name.clone()}</dd>
                            <dt>"Parent email"</dt>
                            <dd>{s.parent_email.clone()}</dd>
                            <dt>"Parent phone"</dt>
                            <dd>{s.parent_phone.clone()}</dd>
                        </dl>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| student.set(None)>"Close"</button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    let students = LocalResource::new(crate::net::api::fetch_students);
    let tab = RwSignal::new(StudentTab::default());
    let query = RwSignal::new(String::new());
    let viewing = RwSignal::new(None::<Student>);

    let counts = move || students.get().map(|list| status_counts(&list)).unwrap_or_default();

    let table = move || {
        students.get().map(|list| {
            let shown = filter_students(&list, tab.get(), &query.get());
            let total = list.len();
            let count = shown.len();
            let rows = shown
                .into_iter()
                .map(|s| {
                    let picked = s.clone();
                    view! {
                        <tr>
                            <td>{s.id.clone()}</td>
                            <td>{s.full_name()}</td>
                            <td>{s.email.clone()}</td>
                            <td>{s.grade.clone()}</td>
                            <td>
                                <span class=format!("badge badge--{}", s.status.label().to_lowercase())>
                                    {s.status.label()}
                                </span>
                            </td>
                            <td>
                                <button class="btn btn--small" on:click=move |_| viewing.set(Some(picked.clone()))>
                                    "View"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Grade"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <p class="table__footer">{format!("Showing {count} of {total} students")}</p>
            }
        })
    };

    view! {
        <div class="students-page">
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__label">"Total"</span>
                    <span class="stat-card__value">{move || counts().total}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Active"</span>
                    <span class="stat-card__value">{move || counts().active}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Pending"</span>
                    <span class="stat-card__value">{move || counts().pending}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Inactive"</span>
                    <span class="stat-card__value">{move || counts().inactive}</span>
                </div>
            </div>
            <div class="students-page__toolbar">
                <div class="segmented">
                    {StudentTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="segmented__item"
                                    class:segmented__item--active=move || tab.get() == t
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <input
                    type="search"
                    placeholder="Search by name, email, or ID..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>
            <Suspense fallback=move || view! { <p>"Loading students..."</p> }>{table}</Suspense>
            <StudentDetail student=viewing/>
        </div>
    }
}
