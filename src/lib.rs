//! BOM Inventory API Library
//!
//! Orders, products, parts and product-part associations over a relational
//! store, plus bill-of-materials resolution.
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
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod services;
pub mod tracing;

use axum::{
    routing::{get, put},
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub use handlers::AppServices;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub services: AppServices,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let services = AppServices::new(db.clone());
        Self { db, services }
    }
}

/// Collection routes answer both with and without the trailing slash.
fn collection_routes(
    base: &str,
    list: axum::routing::MethodRouter<AppState>,
) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/", base), list.clone())
        .route(base, list)
}

/// CRUD and bill-of-materials routes under `/api`
pub fn api_routes() -> Router<AppState> {
    let orders = collection_routes(
        "/orders",
        get(handlers::orders::list_orders).post(handlers::orders::create_order),
    )
    .route(
        "/orders/:id",
        put(handlers::orders::update_order).delete(handlers::orders::delete_order),
    );

    let parts = collection_routes(
        "/parts",
        get(handlers::parts::list_parts).post(handlers::parts::create_part),
    )
    .route(
        "/parts/:id",
        put(handlers::parts::update_part).delete(handlers::parts::delete_part),
    );

    let products = collection_routes(
        "/products",
        get(handlers::products::list_products).post(handlers::products::create_product),
    )
    .route(
        "/products/:id",
        put(handlers::products::update_product).delete(handlers::products::delete_product),
    );

    let associations = collection_routes(
        "/ppa",
        get(handlers::associations::list_associations)
            .post(handlers::associations::create_association),
    )
    .route(
        "/ppa/:id",
        put(handlers::associations::update_association)
            .delete(handlers::associations::delete_association),
    );

    let bom = Router::new()
        .route(
            "/product/:name/:multiplier/parts",
            get(handlers::bom::scaled_parts),
        )
        .route("/product/:name/parts", get(handlers::bom::product_parts));

    Router::new()
        .merge(orders)
        .merge(parts)
        .merge(products)
        .merge(associations)
        .merge(bom)
}

/// Full application router with state, docs, tracing and request ids.
///
/// CORS and compression are left to the binary since they depend on the
/// deployment.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .nest("/api", api_routes())
        .merge(openapi::swagger_ui())
        .with_state(state)
        .layer(crate::tracing::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
}
