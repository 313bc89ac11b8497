#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use logistics_api::{
    build_router,
    config::AppConfig,
    db::{self, DbConfig},
    entities::{order, tracking_history},
    AppState,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde_json::Value;
use tower::ServiceExt;

/// Helper harness for driving the real router over an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with an empty, migrated database.
    pub async fn new() -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_000,
            "test".to_string(),
        );
        // Every connection to `sqlite::memory:` is its own database.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_with_config(&DbConfig::from(&cfg))
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = build_router(state.clone());

        Self { router, state }
    }

    pub fn db(&self) -> &db::DbPool {
        &self.state.db
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.send(request).await
    }

    /// Sends a prebuilt request through the router.
    pub async fn send(&self, request: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Sends a request and decodes the JSON body.
    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = self.request(method, uri, body).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.json(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::POST, uri, Some(body)).await
    }

    /// Inserts an order with placeholder customer details.
    pub async fn insert_order(
        &self,
        order_id: &str,
        phone: &str,
        status: &str,
        created_at: &str,
    ) -> order::Model {
        order::ActiveModel {
            order_id: Set(order_id.to_string()),
            customer_name: Set("Wang Fang".to_string()),
            customer_phone: Set(phone.to_string()),
            pickup_address: Set("18 Renmin Road, Pudong, Shanghai".to_string()),
            delivery_address: Set("305 Jianguo Road, Chaoyang, Beijing".to_string()),
            package_type: Set("Small parcel".to_string()),
            status: Set(status.to_string()),
            current_location: Set(Some("Beijing Sorting Hub".to_string())),
            estimated_delivery: Set(Some("2025-11-05 18:00:00".to_string())),
            scheduled_time: Set(None),
            created_at: Set(created_at.to_string()),
            updated_at: Set(created_at.to_string()),
        }
        .insert(self.db())
        .await
        .expect("failed to insert order")
    }

    pub async fn insert_tracking(&self, order_id: &str, status: &str, timestamp: &str) {
        tracking_history::ActiveModel {
            order_id: Set(order_id.to_string()),
            status: Set(status.to_string()),
            location: Set("Shanghai Service Point".to_string()),
            description: Set(format!("{status} checkpoint")),
            timestamp: Set(timestamp.to_string()),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("failed to insert tracking record");
    }

    pub async fn fetch_order(&self, order_id: &str) -> order::Model {
        order::Entity::find_by_id(order_id.to_string())
            .one(self.db())
            .await
            .expect("query failed")
            .expect("order missing")
    }
}
