use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::models::status_text;

fn current_request_id() -> Option<String> {
    crate::tracing::current_request_id().map(|rid| rid.as_str().to_string())
}

/// Error envelope returned by every failing endpoint except `/health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "success": false,
    "error": "Order not found",
    "order_id": "ORD20251102001",
    "request_id": "3f0c1f5e-8d0b-4a7e-9a59-0a3b8f1f2c11",
    "timestamp": "2025-11-02T10:30:00.000Z"
}))]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable error description
    pub error: String,
    /// Requested order code, for lookups that found nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Status that blocked the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_status_text: Option<String>,
    /// Unique request identifier for support and debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// RFC 3339 timestamp when error occurred
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Order not found")]
    NotFound { order_id: String },

    #[error("Order status does not allow delivery scheduling")]
    InvalidState { current_status: String },

    #[error("Invalid time format, use YYYY-MM-DD HH:MM:SS")]
    InvalidFormat { value: String },

    /// Request body that could not be read as a schedule request
    #[error("Invalid request body: {0}")]
    ValidationError(String),
}

impl ServiceError {
    pub fn not_found(order_id: impl Into<String>) -> Self {
        ServiceError::NotFound {
            order_id: order_id.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    /// This is the single source of truth for error-to-status mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidState { .. } | Self::InvalidFormat { .. } | Self::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error message suitable for HTTP responses.
    /// Database errors return a generic message; the detail only goes to the log.
    pub fn response_message(&self) -> String {
        match self {
            Self::DatabaseError(_) => "Database error".to_string(),
            _ => self.to_string(),
        }
    }

    fn to_error_response(&self) -> ErrorResponse {
        let mut body = ErrorResponse {
            success: false,
            error: self.response_message(),
            order_id: None,
            current_status: None,
            current_status_text: None,
            request_id: current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        match self {
            Self::NotFound { order_id } => body.order_id = Some(order_id.clone()),
            Self::InvalidState { current_status } => {
                body.current_status_text = Some(status_text(current_status));
                body.current_status = Some(current_status.clone());
            }
            _ => {}
        }

        body
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, Json(self.to_error_response())).into_response()
    }
}
