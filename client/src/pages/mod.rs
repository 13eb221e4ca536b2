//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates the shared chrome to
//! `components::app_shell`. Protected pages are wrapped by
//! `components::protected_route` in `app.rs`, never guarded from inside.

pub mod attendance;
pub mod calendar;
pub mod dashboard;
pub mod grades;
pub mod home;
pub mod messages;
pub mod profile;
pub mod schedule;
pub mod schedule_builder;
pub mod students;
