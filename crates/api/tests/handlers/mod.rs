mod auth_test;
mod faculty_test;
mod middleware_test;
mod notifications_test;
mod timetable_test;
