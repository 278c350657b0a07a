//! # Academy API
//!
//! The API crate provides the web server for the academy portal. It exposes
//! RESTful endpoints for authentication, the class timetable, faculty
//! management, the notification feed, and the three AI assistant tools.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Gate**: Resolve submitted credentials to a role-tagged identity
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and talks to persistence only
//! through the injected [`academy_store::EntityStore`] capability.

/// Configuration module for API settings
pub mod config;
/// Session/credential gate resolving logins and registrations
pub mod gate;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use academy_ai::GeminiClient;
use academy_store::{EntityStore, SessionCache};
use axum::Router;
use eyre::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
///
/// Holds the storage capability selected at startup, the session cache,
/// and the optional AI client (absent when no API key is configured).
pub struct ApiState {
    pub store: Arc<dyn EntityStore>,
    pub session: SessionCache,
    pub ai: Option<Arc<GeminiClient>>,
}

/// Builds the full application router over the given state.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Authentication and session endpoints
        .merge(routes::auth::routes())
        // Student roster
        .merge(routes::students::routes())
        // Faculty management endpoints
        .merge(routes::faculty::routes())
        // Timetable endpoints
        .merge(routes::timetable::routes())
        // Notification feed endpoints
        .merge(routes::notifications::routes())
        // AI assistant tools
        .merge(routes::ai::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and state.
///
/// Initializes logging, configures routes with CORS and timeout layers,
/// and serves until the process exits.
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect::<Vec<axum::http::HeaderValue>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
