pub mod associations;
pub mod bom;
pub mod common;
pub mod health;
pub mod orders;
pub mod parts;
pub mod products;

use crate::{
    db::DbPool,
    services::{
        associations::AssociationService, bom::BomResolver, orders::OrderService,
        parts::PartService, products::ProductService,
    },
};
use std::sync::Arc;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub orders: Arc<OrderService>,
    pub parts: Arc<PartService>,
    pub products: Arc<ProductService>,
    pub associations: Arc<AssociationService>,
    pub bom: Arc<BomResolver>,
}

impl AppServices {
    /// Builds every service over the shared pool.
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            orders: Arc::new(OrderService::new(db_pool.clone())),
            parts: Arc::new(PartService::new(db_pool.clone())),
            products: Arc::new(ProductService::new(db_pool.clone())),
            associations: Arc::new(AssociationService::new(db_pool.clone())),
            bom: Arc::new(BomResolver::with_pool(db_pool)),
        }
    }
}
