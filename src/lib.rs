//! Logistics Tracking API Library
//!
//! Order lookup, phone-based order listing and delivery scheduling over a
//! small relational store, plus the generator that seeds it with demo data.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod seed;
pub mod services;
pub mod tracing;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::ToSchema;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub orders: Arc<services::OrderService>,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let orders = Arc::new(services::OrderService::new(db.clone()));
        Self { db, config, orders }
    }
}

// Common response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    /// Number of items, on list endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            request_id: crate::tracing::current_request_id().map(|rid| rid.as_str().to_string()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message: None,
            meta: ResponseMeta::capture(),
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Any origin, method and header unless explicit origins are configured.
pub fn cors_layer(cfg: &config::AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .cors_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        ::tracing::info!("Restricting CORS to {} configured origin(s)", origins.len());
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Builds the full HTTP surface: API routes, health, docs and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::system::root))
        .route("/health", get(health::health_check))
        .route(
            "/api/orders/by-phone/:phone",
            get(handlers::orders::orders_by_phone),
        )
        .route("/api/orders/:order_id", get(handlers::orders::get_order))
        .route(
            "/api/orders/:order_id/schedule",
            post(handlers::orders::schedule_delivery),
        )
        .merge(openapi::swagger_ui())
        .with_state(state)
        .layer(crate::tracing::configure_http_tracing())
        .layer(middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .layer(cors)
}
