use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use tracing::debug;

use crate::{
    dto::orders::{OrderDetail, OrderSummary, ScheduleRequest, ScheduleResult},
    errors::ServiceError,
    ApiResponse, AppState,
};

/// Advisory attached to an empty phone lookup
pub const NO_ORDERS_FOR_PHONE: &str = "No orders found for this phone number";

/// Get order
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    summary = "Get order",
    description = "Order details and tracking history, oldest checkpoint first",
    params(("order_id" = String, Path, description = "Order code", example = "ORD20251102001")),
    responses(
        (status = 200, description = "Order retrieved successfully", body = ApiResponse<OrderDetail>,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 404, description = "Order not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<OrderDetail>>, ServiceError> {
    let detail = state.orders.get_order(&order_id).await?;
    Ok(Json(ApiResponse::success(detail)))
}

/// List orders by phone
#[utoipa::path(
    get,
    path = "/api/orders/by-phone/{phone}",
    summary = "List orders by phone",
    description = "Summaries of every order placed under a phone number, newest first. \
                   An unknown number returns an empty list rather than an error.",
    params(("phone" = String, Path, description = "Customer phone number", example = "+8613800138000")),
    responses(
        (status = 200, description = "Orders retrieved successfully", body = ApiResponse<Vec<OrderSummary>>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "Orders"
)]
pub async fn orders_by_phone(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> Result<Json<ApiResponse<Vec<OrderSummary>>>, ServiceError> {
    let orders = state.orders.orders_by_phone(&phone).await?;
    let count = orders.len();

    let response = ApiResponse::success(orders).with_count(count);
    if count == 0 {
        return Ok(Json(response.with_message(NO_ORDERS_FOR_PHONE)));
    }
    Ok(Json(response))
}

/// Schedule delivery
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/schedule",
    summary = "Confirm or change delivery time",
    description = "Books a delivery appointment. Only orders that are in transit or out for \
                   delivery accept one; an in-transit order moves to out for delivery.",
    params(("order_id" = String, Path, description = "Order code", example = "ORD20251102001")),
    request_body = ScheduleRequest,
    responses(
        (status = 200, description = "Delivery time saved", body = ApiResponse<ScheduleResult>),
        (status = 400, description = "Order state does not allow scheduling, the time is malformed, or the body is not a valid request", body = crate::errors::ErrorResponse),
        (status = 404, description = "Order not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "Scheduling"
)]
pub async fn schedule_delivery(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ScheduleResult>>, ServiceError> {
    let Json(request) =
        payload.map_err(|rejection| ServiceError::ValidationError(rejection.body_text()))?;

    let result = state.orders.schedule_delivery(&order_id, &request).await?;
    debug!(order_id = %result.order_id, action = ?request.action, "schedule action applied");

    Ok(Json(
        ApiResponse::success(result).with_message(request.action.message()),
    ))
}
