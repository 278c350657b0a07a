use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/faculty", get(handlers::faculty::list_faculty))
        .route("/api/faculty", post(handlers::faculty::add_faculty))
        .route(
            "/api/faculty/:username",
            delete(handlers::faculty::delete_faculty),
        )
}
