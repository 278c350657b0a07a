use axum::extract::{Path, State};
use axum::Json;
use pretty_assertions::assert_eq;

use academy_api::handlers;
use academy_api::handlers::timetable::CreateClassRequest;
use academy_core::errors::AcademyError;
use academy_core::models::notification::NotificationKind;
use academy_core::models::timetable::sort_by_start_time;

use crate::test_utils::TestContext;

fn class(subject: &str, day: &str, start: &str, end: &str) -> CreateClassRequest {
    CreateClassRequest {
        subject: subject.to_string(),
        day: day.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        room: Some("Lab 1".to_string()),
        zoom_link: None,
    }
}

#[tokio::test]
async fn test_add_class_appends_timetable_notification() {
    let ctx = TestContext::new();

    let Json(schedule) = handlers::timetable::add_class(
        State(ctx.state.clone()),
        Json(class("Algebra", "Monday", "09:00", "10:00")),
    )
    .await
    .unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].room, "Lab 1");

    let feed = ctx.state.store.list_notifications().await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].kind, NotificationKind::Timetable);
    assert!(feed[0].message.contains("Algebra"));
    assert!(feed[0].message.contains("Monday"));
}

#[tokio::test]
async fn test_monday_dashboard_sorts_correctly() {
    let ctx = TestContext::new();

    for request in [
        class("Physics", "Monday", "13:00", "14:00"),
        class("Algebra", "Monday", "09:00", "10:00"),
        class("Chemistry", "Tuesday", "08:00", "09:00"),
        class("History", "Monday", "10:30", "11:30"),
    ] {
        handlers::timetable::add_class(State(ctx.state.clone()), Json(request))
            .await
            .unwrap();
    }

    // What the student dashboard does on its next poll: fetch, filter the
    // day, sort by start time.
    let Json(schedule) = handlers::timetable::list_schedule(State(ctx.state.clone()))
        .await
        .unwrap();
    let mut monday: Vec<_> = schedule.into_iter().filter(|s| s.day == "Monday").collect();
    sort_by_start_time(&mut monday);

    let subjects: Vec<&str> = monday.iter().map(|s| s.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Algebra", "History", "Physics"]);
}

#[tokio::test]
async fn test_add_class_validates_times() {
    let ctx = TestContext::new();

    // Unpadded hour breaks the HH:MM contract.
    let err = handlers::timetable::add_class(
        State(ctx.state.clone()),
        Json(class("Algebra", "Monday", "9:00", "10:00")),
    )
    .await
    .unwrap_err();
    assert!(matches!(err.0, AcademyError::Validation(_)));

    // End must come after start.
    let err = handlers::timetable::add_class(
        State(ctx.state.clone()),
        Json(class("Algebra", "Monday", "10:00", "09:00")),
    )
    .await
    .unwrap_err();
    assert!(matches!(err.0, AcademyError::Validation(_)));

    assert!(ctx.state.store.list_classes().await.unwrap().is_empty());
    assert!(ctx.state.store.list_notifications().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_class_by_id() {
    let ctx = TestContext::new();

    let Json(schedule) = handlers::timetable::add_class(
        State(ctx.state.clone()),
        Json(class("Algebra", "Monday", "09:00", "10:00")),
    )
    .await
    .unwrap();
    let id = schedule[0].id.clone();

    let Json(after) =
        handlers::timetable::delete_class(State(ctx.state.clone()), Path(id))
            .await
            .unwrap();
    assert!(after.is_empty());

    // Absent id: no error, nothing changes.
    let Json(still_empty) =
        handlers::timetable::delete_class(State(ctx.state.clone()), Path("missing".to_string()))
            .await
            .unwrap();
    assert!(still_empty.is_empty());
}
