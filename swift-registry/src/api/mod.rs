//! HTTP API over the SWIFT code registry

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;

/// Shared handler state; the pool is the only shared resource
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Build the router with all routes and middleware
pub fn build_router(pool: SqlitePool) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/swift-codes", post(handlers::create_swift_code))
        .route(
            "/v1/swift-codes/country/:country_iso2",
            get(handlers::list_by_country),
        )
        .route(
            "/v1/swift-codes/:swift_code",
            get(handlers::get_swift_code).delete(handlers::delete_swift_code),
        )
        .with_state(AppState { pool });

    with_middleware(routes)
}

fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(axum::middleware::from_fn(middleware::log_requests))
}

/// Serve the API on `bind_addr` until Ctrl-C
pub async fn serve(pool: SqlitePool, bind_addr: &str) -> Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(pool))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
