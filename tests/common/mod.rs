#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use bom_inventory_api::{app_router, config::AppConfig, db, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Helper harness for spinning up the application against an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_000,
            "test".to_string(),
        );
        cfg.auto_migrate = true;
        // A single connection keeps every query on the same in-memory database.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool));
        let router = app_router(state.clone());

        Self { router, state }
    }

    /// Send a request against the router with an optional JSON body.
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
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Sends a request and decodes the JSON reply.
    pub async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = self.request(method, uri, body).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body was not JSON")
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::DELETE, uri, None).await
    }

    /// Creates a product and returns its id.
    pub async fn seed_product(&self, name: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/products/",
                json!({ "name": name, "description": format!("{name} description") }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "seed product failed: {body}");
        body["product_id"].as_i64().expect("product id")
    }

    /// Creates a part with the given stock and returns its id.
    pub async fn seed_part(&self, name: &str, inventory: i32) -> i64 {
        let (status, body) = self
            .post(
                "/api/parts/",
                json!({ "part_name": name, "inventory_quantity": inventory }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "seed part failed: {body}");
        body["part_id"].as_i64().expect("part id")
    }

    /// Links a part to a product and returns the association id.
    pub async fn seed_association(&self, product_id: i64, part_id: i64, quantity: i32) -> i64 {
        let (status, body) = self
            .post(
                "/api/ppa/",
                json!({ "product_id": product_id, "part_id": part_id, "quantity": quantity }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "seed association failed: {body}");
        body["id"].as_i64().expect("association id")
    }
}
