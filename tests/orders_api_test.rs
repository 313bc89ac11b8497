mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
};
use common::TestApp;
use rstest::rstest;
use serde_json::json;

const PHONE: &str = "+8613812345678";

#[tokio::test]
async fn root_describes_the_service() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(
        body["endpoints"]["get_order"],
        "GET /api/orders/{order_id}"
    );
}

#[tokio::test]
async fn get_order_returns_detail_with_sorted_history() {
    let app = TestApp::new().await;
    app.insert_order("ORD20251101001", PHONE, "in_transit", "2025-11-01 08:00:00")
        .await;
    // Inserted out of order on purpose
    app.insert_tracking("ORD20251101001", "in_transit", "2025-11-01 14:00:00")
        .await;
    app.insert_tracking("ORD20251101001", "picked_up", "2025-11-01 10:00:00")
        .await;
    app.insert_tracking("ORD20251101001", "in_transit", "2025-11-02 06:30:00")
        .await;

    let (status, body) = app.get("/api/orders/ORD20251101001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["order_id"], "ORD20251101001");
    assert_eq!(data["status"], "in_transit");
    assert_eq!(data["status_text"], "In transit");
    assert_eq!(data["scheduled_time"], serde_json::Value::Null);

    let history = data["tracking_history"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    let stamps: Vec<&str> = history
        .iter()
        .map(|r| r["timestamp"].as_str().unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(history[0]["status"], "picked_up");
}

#[tokio::test]
async fn unknown_status_code_is_echoed_as_text() {
    let app = TestApp::new().await;
    app.insert_order("ORD20251101002", PHONE, "held_at_customs", "2025-11-01 08:00:00")
        .await;

    let (_, body) = app.get("/api/orders/ORD20251101002").await;

    assert_eq!(body["data"]["status_text"], "held_at_customs");
    assert_eq!(body["data"]["tracking_history"], json!([]));
}

#[tokio::test]
async fn get_unknown_order_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/orders/ORD19990101999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["order_id"], "ORD19990101999");
}

#[tokio::test]
async fn orders_by_phone_lists_newest_first() {
    let app = TestApp::new().await;
    app.insert_order("ORD20251028001", PHONE, "delivered", "2025-10-28 09:00:00")
        .await;
    app.insert_order("ORD20251101003", PHONE, "pending", "2025-11-01 09:00:00")
        .await;
    app.insert_order("ORD20251030002", "+8615000000000", "pending", "2025-10-30 09:00:00")
        .await;

    let (status, body) = app.get(&format!("/api/orders/by-phone/{PHONE}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data[0]["order_id"], "ORD20251101003");
    assert_eq!(data[0]["status_text"], "Awaiting pickup");
    assert_eq!(data[1]["order_id"], "ORD20251028001");
    assert!(data[1].get("customer_name").is_none());
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn orders_by_unknown_phone_is_an_empty_success() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/orders/by-phone/+8600000000000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
    assert_eq!(
        body["message"],
        logistics_api::handlers::orders::NO_ORDERS_FOR_PHONE
    );
}

#[rstest]
#[case("pending", "Awaiting pickup")]
#[case("picked_up", "Picked up")]
#[case("delivered", "Delivered")]
#[case("failed", "Delivery failed")]
#[case("returned", "Returned")]
#[tokio::test]
async fn scheduling_rejects_orders_outside_transit(#[case] status: &str, #[case] text: &str) {
    let app = TestApp::new().await;
    app.insert_order("ORD20251101004", PHONE, status, "2025-11-01 08:00:00")
        .await;

    let (code, body) = app
        .post(
            "/api/orders/ORD20251101004/schedule",
            json!({"scheduled_time": "2025-11-03 14:30:00", "action": "confirm"}),
        )
        .await;

    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["current_status"], status);
    assert_eq!(body["current_status_text"], text);

    let stored = app.fetch_order("ORD20251101004").await;
    assert_eq!(stored.status, status);
    assert!(stored.scheduled_time.is_none());
}

#[tokio::test]
async fn scheduling_in_transit_order_advances_status() {
    let app = TestApp::new().await;
    app.insert_order("ORD20251101005", PHONE, "in_transit", "2025-11-01 08:00:00")
        .await;
    app.insert_tracking("ORD20251101005", "picked_up", "2025-11-01 10:00:00")
        .await;

    let (code, body) = app
        .post(
            "/api/orders/ORD20251101005/schedule",
            json!({"scheduled_time": "2025-11-03 14:30:00", "action": "confirm"}),
        )
        .await;

    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Delivery time confirmed");
    assert_eq!(body["data"]["order_id"], "ORD20251101005");
    assert_eq!(body["data"]["scheduled_time"], "2025-11-03 14:30:00");
    assert_eq!(body["data"]["status"], "out_for_delivery");
    assert_eq!(body["data"]["status_text"], "Out for delivery");

    let stored = app.fetch_order("ORD20251101005").await;
    assert_eq!(stored.status, "out_for_delivery");
    assert_eq!(stored.scheduled_time.as_deref(), Some("2025-11-03 14:30:00"));
    assert!(stored.updated_at > stored.created_at);

    // Scheduling never appends a checkpoint
    let (_, detail) = app.get("/api/orders/ORD20251101005").await;
    assert_eq!(
        detail["data"]["tracking_history"].as_array().unwrap().len(),
        1
    );

    // Second call on the now out-for-delivery order keeps the status
    let (code, body) = app
        .post(
            "/api/orders/ORD20251101005/schedule",
            json!({"scheduled_time": "2025-11-04 09:00:00", "action": "change"}),
        )
        .await;

    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["message"], "Delivery time changed");
    assert_eq!(body["data"]["status"], "out_for_delivery");

    let stored = app.fetch_order("ORD20251101005").await;
    assert_eq!(stored.scheduled_time.as_deref(), Some("2025-11-04 09:00:00"));
}

#[tokio::test]
async fn unrecognised_action_gets_generic_message() {
    let app = TestApp::new().await;
    app.insert_order("ORD20251101006", PHONE, "out_for_delivery", "2025-11-01 08:00:00")
        .await;

    let (code, body) = app
        .post(
            "/api/orders/ORD20251101006/schedule",
            json!({"scheduled_time": "2025-11-03 18:00:00", "action": "postpone"}),
        )
        .await;

    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["message"], "Delivery time updated");
    assert_eq!(body["data"]["status"], "out_for_delivery");
}

#[rstest]
#[case("2025-13-40 99:99:99")]
#[case("2025-11-03T14:30:00")]
#[case("tomorrow afternoon")]
#[case("")]
#[tokio::test]
async fn scheduling_rejects_malformed_times(#[case] scheduled_time: &str) {
    let app = TestApp::new().await;
    app.insert_order("ORD20251101007", PHONE, "in_transit", "2025-11-01 08:00:00")
        .await;

    let (code, body) = app
        .post(
            "/api/orders/ORD20251101007/schedule",
            json!({"scheduled_time": scheduled_time, "action": "confirm"}),
        )
        .await;

    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body.get("current_status").is_none());

    let stored = app.fetch_order("ORD20251101007").await;
    assert_eq!(stored.status, "in_transit");
    assert!(stored.scheduled_time.is_none());
}

#[rstest]
#[case(json!({"scheduled_time": "2025-11-03 14:30:00"}), "action")]
#[case(json!({"scheduled_time": 20251103, "action": "confirm"}), "scheduled_time")]
#[case(json!("confirm"), "")]
#[tokio::test]
async fn unreadable_schedule_body_gets_error_envelope(
    #[case] payload: serde_json::Value,
    #[case] field: &str,
) {
    let app = TestApp::new().await;
    app.insert_order("ORD20251101013", PHONE, "in_transit", "2025-11-01 08:00:00")
        .await;

    let (code, body) = app
        .post("/api/orders/ORD20251101013/schedule", payload)
        .await;

    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid request body"));
    assert!(error.contains(field));
    assert!(body["request_id"].is_string());
    assert!(body["timestamp"].is_string());

    let stored = app.fetch_order("ORD20251101013").await;
    assert_eq!(stored.status, "in_transit");
    assert!(stored.scheduled_time.is_none());
}

#[tokio::test]
async fn scheduling_unknown_order_is_not_found() {
    let app = TestApp::new().await;

    let (code, body) = app
        .post(
            "/api/orders/ORD19990101999/schedule",
            json!({"scheduled_time": "not a time", "action": "confirm"}),
        )
        .await;

    assert_eq!(code, StatusCode::NOT_FOUND);
    assert_eq!(body["order_id"], "ORD19990101999");
}

#[tokio::test]
async fn state_is_checked_before_time_format() {
    let app = TestApp::new().await;
    app.insert_order("ORD20251101008", PHONE, "delivered", "2025-11-01 08:00:00")
        .await;

    let (code, body) = app
        .post(
            "/api/orders/ORD20251101008/schedule",
            json!({"scheduled_time": "2025-13-40 99:99:99", "action": "confirm"}),
        )
        .await;

    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["current_status"], "delivered");
}

#[tokio::test]
async fn health_reports_order_count() {
    let app = TestApp::new().await;
    app.insert_order("ORD20251101009", PHONE, "pending", "2025-11-01 08:00:00")
        .await;

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["total_orders"], 1);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/health", None).await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn error_envelope_reuses_caller_request_id() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .uri("/api/orders/ORD19990101999")
        .header("x-request-id", "support-ticket-7")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["x-request-id"], "support-ticket-7");
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["request_id"], "support-ticket-7");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/orders/{order_id}/schedule"].is_object());
}

#[tokio::test]
async fn health_reports_unhealthy_when_query_fails() {
    use sea_orm::ConnectionTrait;

    let app = TestApp::new().await;
    app.db()
        .execute_unprepared("DROP TABLE tracking_history; DROP TABLE orders;")
        .await
        .unwrap();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "unhealthy");
    assert!(body["error"].is_string());
}
