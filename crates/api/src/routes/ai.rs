use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/ai/chat", post(handlers::ai::chat))
        .route("/api/ai/image", post(handlers::ai::analyze_image))
        .route("/api/ai/speech", post(handlers::ai::synthesize_speech))
}
