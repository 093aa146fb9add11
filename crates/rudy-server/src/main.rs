//! Rudy landing page server
//!
//! Axum-based server backing the landing page: the Google login redirect
//! lookup, the early-access waitlist, and the compiled WASM frontend.

mod app;
mod config;
mod handlers;
mod state;
mod store;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;
use crate::store::MemoryWaitlistStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    if !config.static_dir.is_dir() {
        tracing::warn!("⚠ Frontend not found in {}", config.static_dir.display());
        tracing::warn!("  Build it with: trunk build --release --dist static crates/rudy-web/index.html");
    }

    let state = AppState {
        config: Arc::new(config.clone()),
        waitlist: Arc::new(MemoryWaitlistStore::new()),
    };

    let app = app::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("🚀 Rudy landing server running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health             - Health check");
    tracing::info!("  GET  /auth/login/google  - Login redirect");
    tracing::info!(
        "  POST /waiting-list        - Join the waitlist ({} ms simulated latency)",
        config.waitlist_latency.as_millis()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
