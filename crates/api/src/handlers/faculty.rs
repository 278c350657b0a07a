use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use academy_core::errors::AcademyError;
use academy_core::models::identity::Faculty;

use crate::middleware::error_handling::AppError;
use crate::ApiState;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFacultyRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

#[axum::debug_handler]
pub async fn list_faculty(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Faculty>>, AppError> {
    let faculty = state.store.list_faculty().await?;
    Ok(Json(faculty))
}

/// Admin action: create a faculty account with generated credentials.
/// Returns the re-read collection, the caller never trusts its held copy.
#[axum::debug_handler]
pub async fn add_faculty(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateFacultyRequest>,
) -> Result<Json<Vec<Faculty>>, AppError> {
    if payload.name.trim().is_empty()
        || payload.username.trim().is_empty()
        || payload.password.is_empty()
    {
        return Err(AppError(AcademyError::Validation(
            "All fields are required to generate credentials.".to_string(),
        )));
    }

    // Username uniqueness is checked here, not by the store.
    let existing = state.store.list_faculty().await?;
    if existing.iter().any(|f| f.username == payload.username) {
        return Err(AppError(AcademyError::DuplicateAccount(
            "This username is already taken.".to_string(),
        )));
    }

    let member = Faculty::new(
        payload.name.trim().to_string(),
        payload.username.trim().to_string(),
        payload.password,
    );
    state.store.insert_faculty(&member).await?;

    let faculty = state.store.list_faculty().await?;
    Ok(Json(faculty))
}

/// Admin action: delete by username. Absent usernames are a no-op.
#[axum::debug_handler]
pub async fn delete_faculty(
    State(state): State<Arc<ApiState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<Faculty>>, AppError> {
    state.store.delete_faculty(&username).await?;

    let faculty = state.store.list_faculty().await?;
    Ok(Json(faculty))
}
