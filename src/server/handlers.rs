//! Route handlers for the `/users` endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::json_error;
use super::state::AppState;
use crate::aggregation::Outcome;

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            Outcome::Failure(body) => (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response(),
            Outcome::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /users
pub(crate) async fn handle_list_users(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.service.list_users())
}

/// GET /users/{id}
///
/// An unknown id answers `null` with 200, unlike the dashboard.
pub(crate) async fn handle_get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    Json(state.service.get_user(id))
}

/// GET /users/info
pub(crate) async fn handle_info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.service.service_info()
}

/// GET /users/products
pub(crate) async fn handle_products(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.service.list_products().await
}

/// GET /users/{id}/dashboard
pub(crate) async fn handle_dashboard(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.service.build_dashboard(id).await
}
