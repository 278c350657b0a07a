use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/timetable", get(handlers::timetable::list_schedule))
        .route("/api/timetable", post(handlers::timetable::add_class))
        .route(
            "/api/timetable/:id",
            delete(handlers::timetable::delete_class),
        )
}
