//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::DaemonConfig;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, config: &DaemonConfig) -> Router {
    let api_routes = Router::new()
        // Health and status
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::daemon_status))
        // Activities
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:name/signup", post(handlers::signup_for_activity))
        .route(
            "/activities/:name/unregister",
            delete(handlers::unregister_from_activity),
        );

    // Build router with middleware
    let router = Router::new()
        .route("/", get(handlers::root_redirect))
        .merge(api_routes)
        .nest_service("/static", ServeDir::new(&config.static_files.dir))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    let router = if config.server.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}
