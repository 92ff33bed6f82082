//! recache demo server
//!
//! Minimal axum application serving a JSON endpoint through the response
//! cache middleware, backed by the in-memory storage adapter.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use recache::{cache_middleware, spawn_cleanup_task, CacheConfig, CacheEngine, MemoryAdapter};

/// Main entry point for the demo server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load cache configuration from environment variables
/// 3. Create the in-memory storage adapter and cache engine
/// 4. Start the background expiry sweep task
/// 5. Build the router with the cache middleware installed
/// 6. Serve until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting recache demo server");

    let config = CacheConfig::from_env();
    info!(
        "Configuration loaded: default_duration={}s",
        config.default_duration
    );

    let server_port: u16 = env_or("SERVER_PORT", 3000);
    let cleanup_interval: u64 = env_or("CLEANUP_INTERVAL", 30);

    let adapter = Arc::new(MemoryAdapter::new());
    let engine = Arc::new(CacheEngine::new(adapter.clone(), config));
    info!("Cache engine initialized");

    let cleanup_handle = spawn_cleanup_task(adapter, cleanup_interval);
    info!("Background expiry sweep started");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(hello_handler))
        .layer(from_fn_with_state(engine, cache_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind server port")?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Demo endpoint; every request that reaches it re-executes this handler.
async fn hello_handler() -> Json<Value> {
    Json(json!({ "hello": "World" }))
}

/// Reads a numeric environment variable, falling back to a default.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the expiry sweep task and allows graceful
/// shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Expiry sweep task aborted");
}
