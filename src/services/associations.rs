use crate::{
    db::{sync_serial_sequence, DbPool},
    dto::{ensure_matching_id, ProductPartAssociationPayload},
    entities::product_part_association::{self, Entity as ProductPartAssociation},
    errors::ServiceError,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Bill-of-materials lines linking products to parts
#[derive(Clone)]
pub struct AssociationService {
    db_pool: Arc<DbPool>,
}

impl AssociationService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list_associations(
        &self,
    ) -> Result<Vec<product_part_association::Model>, ServiceError> {
        ProductPartAssociation::find()
            .order_by_asc(product_part_association::Column::Id)
            .all(&*self.db_pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list product-part associations");
                ServiceError::from(e)
            })
    }

    /// Both ends must already exist; the foreign keys reject dangling ids
    #[instrument(skip(self))]
    pub async fn create_association(
        &self,
        payload: ProductPartAssociationPayload,
    ) -> Result<product_part_association::Model, ServiceError> {
        let explicit_id = payload.id.is_some();
        let model = product_part_association::ActiveModel {
            id: payload.id.map(Set).unwrap_or(NotSet),
            product_id: Set(payload.product_id),
            part_id: Set(payload.part_id),
            quantity: Set(payload.quantity),
        };

        let created = model.insert(&*self.db_pool).await.map_err(|e| {
            error!(
                product_id = payload.product_id,
                part_id = payload.part_id,
                error = %e,
                "Failed to create product-part association"
            );
            ServiceError::from(e)
        })?;

        if explicit_id {
            sync_serial_sequence::<ProductPartAssociation, _>(
                &*self.db_pool,
                product_part_association::Column::Id,
            )
            .await?;
        }

        info!(ppa_id = created.id, "Product-part association created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn replace_association(
        &self,
        id: i32,
        payload: ProductPartAssociationPayload,
    ) -> Result<product_part_association::Model, ServiceError> {
        ensure_matching_id("PPA", id, payload.id)?;
        let db = &*self.db_pool;

        let existing = ProductPartAssociation::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("PPA of {} not found", id)))?;

        let mut model: product_part_association::ActiveModel = existing.into();
        model.product_id = Set(payload.product_id);
        model.part_id = Set(payload.part_id);
        model.quantity = Set(payload.quantity);

        let updated = model.update(db).await.map_err(|e| {
            error!(ppa_id = id, error = %e, "Failed to update product-part association");
            ServiceError::from(e)
        })?;

        info!(ppa_id = id, "Product-part association replaced");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_association(&self, id: i32) -> Result<(), ServiceError> {
        let result = ProductPartAssociation::delete_by_id(id)
            .exec(&*self.db_pool)
            .await
            .map_err(|e| {
                error!(ppa_id = id, error = %e, "Failed to delete product-part association");
                ServiceError::from(e)
            })?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("PPA of {} not found", id)));
        }

        info!(ppa_id = id, "Product-part association deleted");
        Ok(())
    }
}
