use std::sync::Arc;

use axum::{extract::State, Json};

use academy_core::models::identity::Student;

use crate::middleware::error_handling::AppError;
use crate::ApiState;

/// Full student roster, as shown on the admin dashboard.
#[axum::debug_handler]
pub async fn list_students(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.store.list_students().await?;
    Ok(Json(students))
}
