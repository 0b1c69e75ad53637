//! HTTP JSON API for the user service.
//!
//! Exposes the user store and the product-service aggregation as an async
//! HTTP service using `axum` + `tokio`. Requests are handled concurrently;
//! handlers share only read-only state.
//!
//! Endpoints:
//! - GET /users                 - All users
//! - GET /users/{id}            - One user, or `null` when unknown
//! - GET /users/info            - Service status line (text/plain)
//! - GET /users/products        - Product catalog via product-service (200 / 500)
//! - GET /users/{id}/dashboard  - User plus product-service status (200 / 404)

mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware as axum_middleware, Json, Router};
use tracing::{info, warn};

use self::handlers::{
    handle_dashboard, handle_get_user, handle_info, handle_list_users, handle_not_found,
    handle_products,
};
use self::middleware::log_requests;
use self::state::AppState;
use crate::aggregation::UserService;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Build the router over `service`.
pub fn router(service: UserService) -> Router {
    let state = Arc::new(AppState { service });

    Router::new()
        .route("/users", get(handle_list_users))
        .route("/users/info", get(handle_info))
        .route("/users/products", get(handle_products))
        .route("/users/{id}", get(handle_get_user))
        .route("/users/{id}/dashboard", get(handle_dashboard))
        .fallback(handle_not_found)
        .layer(axum_middleware::from_fn(log_requests))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn start_server(addr: SocketAddr, service: UserService) -> Result<()> {
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("User service listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
    }
}
