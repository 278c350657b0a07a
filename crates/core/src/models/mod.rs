pub mod chat;
pub mod identity;
pub mod notification;
pub mod timetable;
