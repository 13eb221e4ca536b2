pub mod attendance;
pub mod auth;
pub mod calendar;
pub mod grades;
pub mod messages;
pub mod records;
pub mod schedule;
