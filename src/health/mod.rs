//! Liveness check backed by a count query against the orders table.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::AppState;

/// Body of a successful health check
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    /// Always `healthy`
    pub status: String,
    /// Always `connected`
    pub database: String,
    pub total_orders: u64,
}

/// Body of a failed health check
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthFailure {
    /// Always `unhealthy`
    pub status: String,
    pub error: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    summary = "Health check",
    responses(
        (status = 200, description = "Database reachable", body = HealthReport),
        (status = 500, description = "Database query failed", body = HealthFailure),
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.orders.count_orders().await {
        Ok(total_orders) => Json(HealthReport {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            total_orders,
        })
        .into_response(),
        Err(err) => {
            error!(error = %err, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthFailure {
                    status: "unhealthy".to_string(),
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
