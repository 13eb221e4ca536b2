//! Role dashboards: one landing page per role.
//!
//! ARCHITECTURE
//! ============
//! Each dashboard is rendered inside `AppShell` behind a `ProtectedRoute`
//! limited to its own role. Figures come from `net::api` or are fixed demo
//! numbers; none of them are derived from the session.

use leptos::prelude::*;

use crate::net::types::Course;
use crate::state::auth::AuthState;
use crate::state::calendar::{self, CalendarEvent};
use crate::state::schedule::{classes_on, weekday_name};
use crate::util::clock;

#[component]
fn StatCard(label: &'static str, value: String, #[prop(optional)] hint: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__hint">{hint}</span>
        </div>
    }
}

#[component]
fn Greeting(title: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let first_name = move || {
        auth.with(|a| {
            a.user()
                .and_then(|u| u.name.split_whitespace().next().map(str::to_owned))
                .unwrap_or_default()
        })
    };
    view! {
        <div class="dashboard__greeting">
            <h1>{title}</h1>
            <p>"Welcome back, " {first_name} "!"</p>
        </div>
    }
}

#[component]
fn UpcomingEvents(limit: usize) -> impl IntoView {
    let today = clock::today();
    let mut events = calendar::sample_events(today);
    events.sort_by(|a, b| (a.date, &a.start_time).cmp(&(b.date, &b.start_time)));
    let rows = events
        .into_iter()
        .take(limit)
        .map(|event: CalendarEvent| {
            let when = if event.date == today {
                format!("Today, {}", event.start_time)
            } else {
                format!("{} {}, {}", event.date.month(), event.date.day(), event.start_time)
            };
            view! {
                <li class="event-row">
                    <span class=format!("event-row__kind event-row__kind--{}", event.kind.as_str())>
                        {event.kind.label()}
                    </span>
                    <span class="event-row__title">{event.title}</span>
                    <span class="event-row__meta">{when} " · " {event.location}</span>
                </li>
            }
        })
        .collect_view();
    view! {
        <section class="card">
            <h2 class="card__title">"Upcoming Events"</h2>
            <ul class="event-list">{rows}</ul>
            <a href="/calendar" class="card__link">"Open calendar"</a>
        </section>
    }
}

#[component]
fn CourseProgress(courses: Vec<Course>) -> impl IntoView {
    courses
        .into_iter()
        .map(|course| {
            let width = format!("width: {}%", course.progress);
            let next = course
                .next_assignment
                .map(|a| format!("{a} · due {}", course.next_assignment_due.unwrap_or_default()));
            view! {
                <div class="course-card">
                    <h3 class="course-card__name">{course.name}</h3>
                    <p class="course-card__teacher">{course.teacher}</p>
                    <div class="progress">
                        <div class="progress__bar" style=width></div>
                    </div>
                    <span class="course-card__percent">{course.progress} "%"</span>
                    {next.map(|n| view! { <p class="course-card__next">{n}</p> })}
                </div>
            }
        })
        .collect_view()
}

#[component]
fn TodayClasses() -> impl IntoView {
    let weekday = clock::today().weekday().number_days_from_sunday();
    let schedule = LocalResource::new(crate::net::api::fetch_schedule);
    view! {
        <section class="card">
            <h2 class="card__title">"Today · " {weekday_name(weekday)}</h2>
            <Suspense fallback=move || view! { <p>"Loading schedule..."</p> }>
                {move || {
                    schedule
                        .get()
                        .map(|classes| {
                            let today = classes_on(&classes, weekday);
                            if today.is_empty() {
                                view! { <p class="card__empty">"No classes today."</p> }.into_any()
                            } else {
                                today
                                    .into_iter()
                                    .map(|c| {
                                        view! {
                                            <div class=format!("class-chip {}", c.color)>
                                                <strong>{c.subject.clone()}</strong>
                                                <span>{format!("{} - {}", c.start_time, c.end_time)}</span>
                                                <span>{c.room.clone()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
pub fn StudentDashboard() -> impl IntoView {
    let courses = LocalResource::new(crate::net::api::fetch_courses);
    view! {
        <div class="dashboard">
            <Greeting title="Student Dashboard"/>
            <div class="stat-grid">
                <StatCard label="Attendance" value="95%".to_owned() hint="This term"/>
                <StatCard label="GPA" value="3.7".to_owned()/>
                <StatCard label="Assignments due" value="4".to_owned() hint="This week"/>
            </div>
            <section class="card">
                <h2 class="card__title">"My Courses"</h2>
                <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                    {move || courses.get().map(|list| view! { <div class="course-grid"><CourseProgress courses=list/></div> })}
                </Suspense>
            </section>
            <div class="dashboard__columns">
                <TodayClasses/>
                <UpcomingEvents limit=3/>
            </div>
        </div>
    }
}

#[component]
pub fn TeacherDashboard() -> impl IntoView {
    let assessments = LocalResource::new(crate::net::api::fetch_assessments);
    view! {
        <div class="dashboard">
            <Greeting title="Teacher Dashboard"/>
            <div class="stat-grid">
                <StatCard label="Classes" value="5".to_owned()/>
                <StatCard label="Students" value="127".to_owned()/>
                <StatCard label="Assignments" value="12".to_owned()/>
                <StatCard label="Pending grades" value="8".to_owned()/>
            </div>
            <div class="dashboard__columns">
                <TodayClasses/>
                <UpcomingEvents limit=4/>
            </div>
            <section class="card">
                <h2 class="card__title">"Assessments"</h2>
                <Suspense fallback=move || view! { <p>"Loading assessments..."</p> }>
                    {move || {
                        assessments
                            .get()
                            .map(|list| {
                                list.into_iter()
                                    .filter(|a| a.status != crate::net::types::AssessmentStatus::Closed)
                                    .map(|a| {
                                        view! {
                                            <div class="list-row">
                                                <span>{a.title}</span>
                                                <span class="badge">{a.status.label()}</span>
                                                <span>"Due " {a.due_date}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </Suspense>
            </section>
            <section class="card">
                <h2 class="card__title">"Quick Actions"</h2>
                <div class="quick-actions">
                    <a href="/attendance" class="btn">"Take attendance"</a>
                    <a href="/grades" class="btn">"Enter grades"</a>
                    <a href="/messages" class="btn">"Message parents"</a>
                    <a href="/schedule" class="btn">"View schedule"</a>
                </div>
            </section>
        </div>
    }
}

#[component]
pub fn ParentDashboard() -> impl IntoView {
    let courses = LocalResource::new(crate::net::api::fetch_courses);
    view! {
        <div class="dashboard">
            <Greeting title="Parent Dashboard"/>
            <div class="child-banner">
                <span class="avatar avatar--initials">"EJ"</span>
                <div>
                    <strong>"Emma Johnson"</strong>
                    <p>"Grade 10 · Homeroom 10A"</p>
                </div>
            </div>
            <div class="stat-grid">
                <StatCard label="Attendance" value="96%".to_owned() hint="+2% from last month"/>
                <StatCard label="Average grade" value="3.8".to_owned() hint="GPA"/>
                <StatCard label="Assignments" value="5 due".to_owned() hint="This week"/>
            </div>
            <section class="card">
                <h2 class="card__title">"Course Progress"</h2>
                <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                    {move || courses.get().map(|list| view! { <div class="course-grid"><CourseProgress courses=list/></div> })}
                </Suspense>
            </section>
            <div class="dashboard__columns">
                <UpcomingEvents limit=3/>
                <section class="card">
                    <h2 class="card__title">"Teacher Notes"</h2>
                    <ul class="note-list">
                        <li>"Emma participated actively in the physics lab this week."</li>
                        <li>"Please review the literature essay guidelines together."</li>
                    </ul>
                    <a href="/messages" class="card__link">"Contact teachers"</a>
                </section>
            </div>
        </div>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let students = LocalResource::new(crate::net::api::fetch_students);
    let notifications = [
        ("New Student Registration", "5 new student registrations pending approval", "2 hours ago"),
        ("System Maintenance", "Scheduled maintenance on Saturday, 10 PM - 2 AM", "1 day ago"),
        ("Teacher Meeting", "Faculty meeting scheduled for Friday at 3 PM", "2 days ago"),
    ];
    view! {
        <div class="dashboard">
            <Greeting title="Admin Dashboard"/>
            <div class="stat-grid">
                <StatCard label="Total students" value="1,250".to_owned()/>
                <StatCard label="Teachers" value="85".to_owned()/>
                <StatCard label="Classes" value="42".to_owned()/>
                <StatCard label="Attendance rate" value="94.5%".to_owned()/>
                <StatCard label="Upcoming events" value="8".to_owned()/>
                <StatCard label="Pending requests" value="12".to_owned()/>
            </div>
            <div class="dashboard__columns">
                <section class="card">
                    <h2 class="card__title">"Quick Actions"</h2>
                    <div class="quick-actions">
                        <a href="/students" class="btn">"Manage students"</a>
                        <a href="/teachers" class="btn">"Manage teachers"</a>
                        <a href="/schedule-builder" class="btn">"Build schedule"</a>
                        <a href="/reports" class="btn">"Reports"</a>
                    </div>
                </section>
                <section class="card">
                    <h2 class="card__title">"Recent Notifications"</h2>
                    <ul class="note-list">
                        {notifications
                            .into_iter()
                            .map(|(title, message, time)| {
                                view! {
                                    <li>
                                        <strong>{title}</strong>
                                        <p>{message}</p>
                                        <span class="note-list__time">{time}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
            <section class="card">
                <h2 class="card__title">"Recent Enrollments"</h2>
                <Suspense fallback=move || view! { <p>"Loading students..."</p> }>
                    {move || {
                        students
                            .get()
                            .map(|list| {
                                list.into_iter()
                                    .map(|s| {
                                        view! {
                                            <div class="list-row">
                                                <span>{s.full_name()}</span>
                                                <span>{s.grade}</span>
                                                <span class="badge">{s.status.label()}</span>
                                                <span>{s.enrollment_date}</span>
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
