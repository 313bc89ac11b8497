use std::collections::BTreeMap;

use axum::response::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static service descriptor served at `/`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub description: String,
    /// Operation name to `METHOD path`
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceInfo {
    pub fn current() -> Self {
        let endpoints = [
            ("get_order", "GET /api/orders/{order_id}"),
            ("schedule_delivery", "POST /api/orders/{order_id}/schedule"),
            ("orders_by_phone", "GET /api/orders/by-phone/{phone}"),
            ("health", "GET /health"),
            ("docs", "GET /docs"),
        ]
        .into_iter()
        .map(|(name, route)| (name.to_string(), route.to_string()))
        .collect();

        Self {
            service: "Logistics Tracking API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Order tracking lookups and delivery scheduling for chat assistants"
                .to_string(),
            endpoints,
        }
    }
}

/// Service descriptor
#[utoipa::path(
    get,
    path = "/",
    summary = "Service descriptor",
    responses((status = 200, description = "Service name, version and endpoints", body = ServiceInfo)),
    tag = "System"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lists_order_endpoints() {
        let info = ServiceInfo::current();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(
            info.endpoints.get("get_order").map(String::as_str),
            Some("GET /api/orders/{order_id}")
        );
        assert!(info.endpoints.contains_key("orders_by_phone"));
        assert!(info.endpoints.contains_key("schedule_delivery"));
    }
}
