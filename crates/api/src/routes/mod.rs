pub mod ai;
pub mod auth;
pub mod faculty;
pub mod health;
pub mod notifications;
pub mod students;
pub mod timetable;
