use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of notifications retained in the feed.
pub const FEED_CAP: usize = 20;

/// Recency window used for the unread-count heuristic.
pub const UNREAD_WINDOW_HOURS: i64 = 24;

/// Tag used only for click-routing on the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Timetable,
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Set at construction and never updated afterwards. The feed derives
    /// "unread" from recency instead of from this flag.
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

impl Notification {
    /// Builds a notification stamped with the current wall clock and a
    /// timestamp-derived id.
    pub fn now(message: String, kind: NotificationKind) -> Self {
        let timestamp = Utc::now();
        Self {
            id: timestamp.timestamp_millis().to_string(),
            message,
            timestamp,
            read: false,
            kind,
        }
    }

    /// The notification appended when the admin schedules a class.
    pub fn class_added(subject: &str, day: &str, start_time: &str) -> Self {
        Self::now(
            format!("New {subject} class added on {day} at {start_time}"),
            NotificationKind::Timetable,
        )
    }
}

/// Counts notifications timestamped within the last 24 hours of `now`.
///
/// This is a recency heuristic, not a persisted read-state: viewing the
/// feed does not change the count, only the clock advancing does.
pub fn recent_unread_count(notifications: &[Notification], now: DateTime<Utc>) -> usize {
    let cutoff = now - Duration::hours(UNREAD_WINDOW_HOURS);
    notifications
        .iter()
        .filter(|n| n.timestamp > cutoff)
        .count()
}
