use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use academy_core::errors::AcademyError;
use academy_core::models::notification::Notification;
use academy_core::models::timetable::{ClassSession, ClassTime};

use crate::middleware::error_handling::AppError;
use crate::ApiState;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    pub subject: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: Option<String>,
    pub zoom_link: Option<String>,
}

#[axum::debug_handler]
pub async fn list_schedule(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ClassSession>>, AppError> {
    let schedule = state.store.list_classes().await?;
    Ok(Json(schedule))
}

/// Admin action: schedule a class. Appends a timetable notification as a
/// side effect and returns the re-read schedule.
#[axum::debug_handler]
pub async fn add_class(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateClassRequest>,
) -> Result<Json<Vec<ClassSession>>, AppError> {
    if payload.subject.trim().is_empty() || payload.day.trim().is_empty() {
        return Err(AppError(AcademyError::Validation(
            "Subject, day, start time, and end time are required.".to_string(),
        )));
    }

    let start_time = ClassTime::new(&payload.start_time)?;
    let end_time = ClassTime::new(&payload.end_time)?;
    let session = ClassSession::create(
        payload.day.trim().to_string(),
        start_time,
        end_time,
        payload.subject.trim().to_string(),
        payload.room,
        payload.zoom_link.filter(|link| !link.trim().is_empty()),
    )?;

    state.store.insert_class(&session).await?;
    state
        .store
        .insert_notification(&Notification::class_added(
            &session.subject,
            &session.day,
            session.start_time.as_str(),
        ))
        .await?;

    let schedule = state.store.list_classes().await?;
    Ok(Json(schedule))
}

/// Admin action: delete by id. Absent ids are a no-op. Edits are modeled
/// as delete followed by recreate; there is no update in place.
#[axum::debug_handler]
pub async fn delete_class(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ClassSession>>, AppError> {
    state.store.delete_class(&id).await?;

    let schedule = state.store.list_classes().await?;
    Ok(Json(schedule))
}
