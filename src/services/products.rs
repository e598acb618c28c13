use crate::{
    db::{sync_serial_sequence, DbPool},
    dto::{ensure_matching_id, ProductPayload},
    entities::product::{self, Entity as Product},
    errors::ServiceError,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Service for managing products
#[derive(Clone)]
pub struct ProductService {
    db_pool: Arc<DbPool>,
}

impl ProductService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Lists every product in id order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<product::Model>, ServiceError> {
        Product::find()
            .order_by_asc(product::Column::ProductId)
            .all(&*self.db_pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list products");
                ServiceError::from(e)
            })
    }

    /// Inserts a product; the id is store-assigned unless the payload names one
    #[instrument(skip(self))]
    pub async fn create_product(
        &self,
        payload: ProductPayload,
    ) -> Result<product::Model, ServiceError> {
        let explicit_id = payload.product_id.is_some();
        let model = product::ActiveModel {
            product_id: payload.product_id.map(Set).unwrap_or(NotSet),
            name: Set(payload.name),
            description: Set(payload.description),
        };

        let created = model.insert(&*self.db_pool).await.map_err(|e| {
            error!(error = %e, "Failed to create product");
            ServiceError::from(e)
        })?;

        if explicit_id {
            sync_serial_sequence::<Product, _>(&*self.db_pool, product::Column::ProductId).await?;
        }

        info!(product_id = created.product_id, "Product created");
        Ok(created)
    }

    /// Overwrites every field of an existing product
    #[instrument(skip(self))]
    pub async fn replace_product(
        &self,
        id: i32,
        payload: ProductPayload,
    ) -> Result<product::Model, ServiceError> {
        ensure_matching_id("product", id, payload.product_id)?;
        let db = &*self.db_pool;

        let existing = Product::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("product of {} not found", id)))?;

        let mut model: product::ActiveModel = existing.into();
        model.name = Set(payload.name);
        model.description = Set(payload.description);

        let updated = model.update(db).await.map_err(|e| {
            error!(product_id = id, error = %e, "Failed to update product");
            ServiceError::from(e)
        })?;

        info!(product_id = id, "Product replaced");
        Ok(updated)
    }

    /// Deletes a product; associations and orders go with it
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        let result = Product::delete_by_id(id)
            .exec(&*self.db_pool)
            .await
            .map_err(|e| {
                error!(product_id = id, error = %e, "Failed to delete product");
                ServiceError::from(e)
            })?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "product of {} not found",
                id
            )));
        }

        info!(product_id = id, "Product deleted");
        Ok(())
    }
}
