use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use academy_core::models::identity::Identity;

use crate::gate::{self, LoginRequest, RegisterRequest, StaffLoginRequest};
use crate::middleware::error_handling::AppError;
use crate::ApiState;

/// Persists the resolved identity as the active session and returns it.
///
/// The session cache stores the trimmed copy; the response carries the
/// full identity the gate produced.
async fn establish(state: &ApiState, identity: Identity) -> Result<Json<Identity>, AppError> {
    state.session.save(&identity).await?;
    Ok(Json(identity))
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<Identity>, AppError> {
    let identity = gate::register_student(state.store.as_ref(), payload).await?;
    establish(&state, identity).await
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Identity>, AppError> {
    let identity = gate::login_student(state.store.as_ref(), &payload.email).await?;
    establish(&state, identity).await
}

#[axum::debug_handler]
pub async fn staff_login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<StaffLoginRequest>,
) -> Result<Json<Identity>, AppError> {
    let identity =
        gate::staff_login(state.store.as_ref(), &payload.username, &payload.password).await?;
    establish(&state, identity).await
}

/// Restores the cached session identity, if one exists.
#[axum::debug_handler]
pub async fn session(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match state.session.load().await {
        Some(identity) => Json(identity).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[axum::debug_handler]
pub async fn logout(State(state): State<Arc<ApiState>>) -> Result<StatusCode, AppError> {
    state.session.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
