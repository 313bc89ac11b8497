use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Logistics Tracking API",
        version = "1.0.0",
        description = r#"
# Logistics Tracking API

Order tracking lookups and delivery scheduling for a demo parcel network.

- Look up an order and its tracking history by order code
- List a customer's orders by phone number
- Confirm or change the delivery appointment of an order in transit

Timestamps are `YYYY-MM-DD HH:MM:SS` in server local time.

## Error Handling

Failures share one envelope:

```json
{
  "success": false,
  "error": "Order not found",
  "order_id": "ORD20251102001",
  "timestamp": "2025-11-02T10:30:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development")
    ),
    tags(
        (name = "Orders", description = "Order lookup endpoints"),
        (name = "Scheduling", description = "Delivery appointment endpoints"),
        (name = "System", description = "Service descriptor and health")
    ),
    paths(
        crate::handlers::system::root,
        crate::handlers::orders::get_order,
        crate::handlers::orders::orders_by_phone,
        crate::handlers::orders::schedule_delivery,
        crate::health::health_check,
    ),
    components(
        schemas(
            crate::ResponseMeta,
            crate::errors::ErrorResponse,
            crate::models::OrderStatus,
            crate::dto::orders::OrderDetail,
            crate::dto::orders::OrderSummary,
            crate::dto::orders::TrackingRecord,
            crate::dto::orders::ScheduleAction,
            crate::dto::orders::ScheduleRequest,
            crate::dto::orders::ScheduleResult,
            crate::handlers::system::ServiceInfo,
            crate::health::HealthReport,
            crate::health::HealthFailure,
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/",
            "/health",
            "/api/orders/{order_id}",
            "/api/orders/by-phone/{phone}",
            "/api/orders/{order_id}/schedule",
        ] {
            assert!(paths.contains(&expected), "missing path {expected}");
        }
    }
}
