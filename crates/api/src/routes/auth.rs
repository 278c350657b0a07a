use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/staff", post(handlers::auth::staff_login))
        .route("/api/auth/session", get(handlers::auth::session))
        .route("/api/auth/logout", post(handlers::auth::logout))
}
