use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use academy_core::models::notification::{recent_unread_count, Notification};

use crate::middleware::error_handling::AppError;
use crate::ApiState;

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: usize,
}

/// Recent feed, newest first, at most 20 entries.
#[axum::debug_handler]
pub async fn list_notifications(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let feed = state.store.list_notifications().await?;
    Ok(Json(feed))
}

/// The 24-hour recency heuristic, computed against a fresh store read at
/// call time. Viewing the feed never changes this number.
#[axum::debug_handler]
pub async fn unread_count(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<UnreadCountResponse>, AppError> {
    let feed = state.store.list_notifications().await?;
    Ok(Json(UnreadCountResponse {
        count: recent_unread_count(&feed, Utc::now()),
    }))
}
