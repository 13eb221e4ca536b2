//! Grade manager: assessment list, per-student grade entry, and the
//! new-assessment dialog.

use leptos::prelude::*;

use crate::state::grades::{self, GradeBook, GradeRow};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Assessments,
    Students,
}

#[component]
fn AssessmentTable(book: RwSignal<GradeBook>) -> impl IntoView {
    let rows = move || {
        book.with(|b| {
            b.assessments
                .iter()
                .map(|a| {
                    view! {
                        <tr>
                            <td>{a.title.clone()}</td>
                            <td>{a.kind.clone()}</td>
                            <td>{a.due_date.clone()}</td>
                            <td>{a.total_points}</td>
                            <td>
                                <span class=format!("badge badge--{}", a.status.label().to_lowercase())>
                                    {a.status.label()}
                                </span>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Type"</th>
                    <th>"Due"</th>
                    <th>"Points"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn GradeDialog(book: RwSignal<GradeBook>, student: RwSignal<Option<GradeRow>>) -> impl IntoView {
    let score = RwSignal::new(String::new());
    let feedback = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let max_points = 100;

    let on_save = move |_| {
        let Some(row) = student.get() else {
            return;
        };
        let value = match grades::parse_score(&score.get(), max_points) {
            Ok(value) => value,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        let note = Some(feedback.get());
        book.update(|b| b.record(&row.student_id, value, note.clone()));
        student.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let note = note.filter(|n| !n.trim().is_empty());
            crate::net::api::submit_grade(&row.student_id, "current", f64::from(value), note.as_deref()).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = note;
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| student.set(None)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Grade " {move || student.get().map(|s| s.name).unwrap_or_default()}</h2>
                <label class="dialog__label">
                    {format!("Score (out of {max_points})")}
                    <input
                        class="dialog__input"
                        inputmode="numeric"
                        prop:value=move || score.get()
                        on:input=move |ev| score.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Feedback"
                    <textarea
                        class="dialog__input"
                        prop:value=move || feedback.get()
                        on:input=move |ev| feedback.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {move || error.get().map(|e| view! { <p class="dialog__error">{e}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| student.set(None)>"Cancel"</button>
                    <button class="btn btn--primary" on:click=on_save>"Save grade"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NewAssessmentDialog(book: RwSignal<GradeBook>, open: RwSignal<bool>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let kind = RwSignal::new("Assignment".to_owned());
    let due = RwSignal::new(String::new());
    let points = RwSignal::new("100".to_owned());
    let publish = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_create = move |_| {
        let draft = match grades::assessment_draft(&title.get(), &kind.get(), &due.get(), &points.get(), publish.get())
        {
            Ok(draft) => draft,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        open.set(false);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let created = crate::net::api::create_assessment(draft).await;
            book.update(|b| b.add_assessment(created));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, book);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| open.set(false)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Assessment"</h2>
                <label class="dialog__label">
                    "Title"
                    <input class="dialog__input" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
                </label>
                <label class="dialog__label">
                    "Type"
                    <select class="dialog__input" on:change=move |ev| kind.set(event_target_value(&ev))>
                        {["Assignment", "Exam", "Quiz", "Project"]
                            .into_iter()
                            .map(|k| view! { <option value=k selected=move || kind.get() == k>{k}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Due date"
                    <input class="dialog__input" type="date" prop:value=move || due.get() on:input=move |ev| due.set(event_target_value(&ev))/>
                </label>
                <label class="dialog__label">
                    "Total points"
                    <input
                        class="dialog__input"
                        inputmode="numeric"
                        prop:value=move || points.get()
                        on:input=move |ev| points.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__check">
                    <input type="checkbox" prop:checked=move || publish.get() on:change=move |ev| publish.set(event_target_checked(&ev))/>
                    "Publish immediately"
                </label>
                {move || error.get().map(|e| view! { <p class="dialog__error">{e}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button class="btn btn--primary" on:click=on_create>"Create"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn GradesPage() -> impl IntoView {
    let book = RwSignal::new(GradeBook::new(Vec::new()));
    let loaded = LocalResource::new(crate::net::api::fetch_assessments);
    Effect::new(move || {
        if let Some(list) = loaded.get() {
            book.update(|b| b.assessments = list);
        }
    });

    let tab = RwSignal::new(Tab::Assessments);
    let grading = RwSignal::new(None::<GradeRow>);
    let creating = RwSignal::new(false);

    let student_rows = move || {
        book.with(|b| {
            b.visible_rows()
                .into_iter()
                .map(|row| {
                    let picked = row.clone();
                    let score = row.score.map_or_else(|| "—".to_owned(), |s| s.to_string());
                    view! {
                        <tr>
                            <td>{row.name.clone()}</td>
                            <td>{score}</td>
                            <td><span class="badge">{row.status.label()}</span></td>
                            <td>
                                <button class="btn btn--small" on:click=move |_| grading.set(Some(picked.clone()))>
                                    "Grade"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };
    let average = move || {
        book.with(|b| grades::class_average(&b.rows)).map_or_else(|| "—".to_owned(), |avg| format!("{avg:.1}"))
    };

    view! {
        <div class="grades-page">
            <div class="grades-page__toolbar">
                <h2>"Grade Manager"</h2>
                <span class="toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| creating.set(true)>"+ New Assessment"</button>
            </div>
            <div class="segmented">
                <button
                    class="segmented__item"
                    class:segmented__item--active=move || tab.get() == Tab::Assessments
                    on:click=move |_| tab.set(Tab::Assessments)
                >
                    "Assessments"
                </button>
                <button
                    class="segmented__item"
                    class:segmented__item--active=move || tab.get() == Tab::Students
                    on:click=move |_| tab.set(Tab::Students)
                >
                    "Students"
                </button>
            </div>
            <Show
                when=move || tab.get() == Tab::Students
                fallback=move || view! { <AssessmentTable book/> }
            >
                <div class="grades-page__students">
                    <input
                        type="search"
                        placeholder="Search students..."
                        prop:value=move || book.with(|b| b.query.clone())
                        on:input=move |ev| book.update(|b| b.query = event_target_value(&ev))
                    />
                    <p class="grades-page__average">"Class average: " {average}</p>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Student"</th>
                                <th>"Score"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>{student_rows}</tbody>
                    </table>
                </div>
            </Show>
            <Show when=move || grading.with(Option::is_some)>
                <GradeDialog book student=grading/>
            </Show>
            <Show when=move || creating.get()>
                <NewAssessmentDialog book open=creating/>
            </Show>
        </div>
    }
}
