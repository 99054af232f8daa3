use axum::{
    middleware as axum_mw,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::lens::stream;
use crate::middleware::boundary;
use crate::AppState;

/// Builds the full Axum `Router` with all routes and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ── User endpoints ──────────────────────────────────────
        .route("/api/users/:id", get(handlers::users::get_user))
        .route("/api/users", post(handlers::users::create_user))
        // ── Session endpoints ───────────────────────────────────
        .route(
            "/api/sessions/:id",
            get(handlers::sessions::get_session),
        )
        .route("/api/sessions", post(handlers::sessions::create_session))
        // ── Debug overlay ───────────────────────────────────────
        .route("/debug/redis", get(stream::get_results))
        .route("/debug/redis/stream", get(stream::results_stream))
        // ── Request boundary: resets the lens window, stamps headers ──
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            boundary::request_boundary,
        ))
        // ── Provide shared state to all routes above ────────────
        .with_state(state)
        .layer(CorsLayer::permissive())
}
