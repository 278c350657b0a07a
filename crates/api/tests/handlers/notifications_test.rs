use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;

use academy_api::handlers;
use academy_api::handlers::timetable::CreateClassRequest;
use academy_core::models::notification::{Notification, NotificationKind, FEED_CAP};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_unread_count_includes_fresh_entry() {
    let ctx = TestContext::new();

    handlers::timetable::add_class(
        State(ctx.state.clone()),
        Json(CreateClassRequest {
            subject: "Algebra".to_string(),
            day: "Monday".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            room: None,
            zoom_link: None,
        }),
    )
    .await
    .unwrap();

    let Json(response) = handlers::notifications::unread_count(State(ctx.state.clone()))
        .await
        .unwrap();
    assert_eq!(response.count, 1);

    // Viewing the feed does not consume anything: the count is recency.
    handlers::notifications::list_notifications(State(ctx.state.clone()))
        .await
        .unwrap();
    let Json(response) = handlers::notifications::unread_count(State(ctx.state.clone()))
        .await
        .unwrap();
    assert_eq!(response.count, 1);
}

#[tokio::test]
async fn test_unread_count_excludes_day_old_entries() {
    let ctx = TestContext::new();

    let mut old = Notification::now("yesterday's news".to_string(), NotificationKind::General);
    old.timestamp = Utc::now() - Duration::hours(25);
    ctx.state.store.insert_notification(&old).await.unwrap();

    let mut fresh = Notification::now("today's news".to_string(), NotificationKind::General);
    fresh.timestamp = Utc::now() - Duration::minutes(5);
    ctx.state.store.insert_notification(&fresh).await.unwrap();

    let Json(feed) = handlers::notifications::list_notifications(State(ctx.state.clone()))
        .await
        .unwrap();
    assert_eq!(feed.len(), 2);

    // Only the entry inside the 24-hour window counts as unread.
    let Json(response) = handlers::notifications::unread_count(State(ctx.state.clone()))
        .await
        .unwrap();
    assert_eq!(response.count, 1);
}

#[tokio::test]
async fn test_feed_stays_capped_through_handler() {
    let ctx = TestContext::new();

    for n in 0..25 {
        let mut item = Notification::now(format!("event {n}"), NotificationKind::General);
        item.id = n.to_string();
        ctx.state.store.insert_notification(&item).await.unwrap();
    }

    let Json(feed) = handlers::notifications::list_notifications(State(ctx.state.clone()))
        .await
        .unwrap();
    assert_eq!(feed.len(), FEED_CAP);
    assert_eq!(feed[0].message, "event 24");
}
