//! Router assembly

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use rudy_core::client::{LOGIN_PATH, WAITLIST_PATH};

use crate::handlers::{health_check, join_waitlist, login_redirect};
use crate::state::AppState;

/// Build the full application: API routes plus the static frontend
pub fn router(state: AppState) -> Router {
    // The frontend may be served from a separate dev server
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = &state.config.static_dir;
    let frontend = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route(LOGIN_PATH, get(login_redirect))
        .route(WAITLIST_PATH, post(join_waitlist))
        .fallback_service(frontend)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
