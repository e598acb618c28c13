use crate::{
    db::{sync_serial_sequence, DbPool},
    dto::{ensure_matching_id, PartPayload},
    entities::part::{self, Entity as Part},
    errors::ServiceError,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Parts and their on-hand inventory
#[derive(Clone)]
pub struct PartService {
    db_pool: Arc<DbPool>,
}

impl PartService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list_parts(&self) -> Result<Vec<part::Model>, ServiceError> {
        Part::find()
            .order_by_asc(part::Column::PartId)
            .all(&*self.db_pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list parts");
                ServiceError::from(e)
            })
    }

    #[instrument(skip(self))]
    pub async fn create_part(&self, payload: PartPayload) -> Result<part::Model, ServiceError> {
        let explicit_id = payload.part_id.is_some();
        let model = part::ActiveModel {
            part_id: payload.part_id.map(Set).unwrap_or(NotSet),
            part_name: Set(payload.part_name),
            inventory_quantity: Set(payload.inventory_quantity),
        };

        let created = model.insert(&*self.db_pool).await.map_err(|e| {
            error!(error = %e, "Failed to create part");
            ServiceError::from(e)
        })?;

        if explicit_id {
            sync_serial_sequence::<Part, _>(&*self.db_pool, part::Column::PartId).await?;
        }

        info!(
            part_id = created.part_id,
            inventory = created.inventory_quantity,
            "Part created"
        );
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn replace_part(
        &self,
        id: i32,
        payload: PartPayload,
    ) -> Result<part::Model, ServiceError> {
        ensure_matching_id("part", id, payload.part_id)?;
        let db = &*self.db_pool;

        let existing = Part::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("part of {} not found", id)))?;

        let mut model: part::ActiveModel = existing.into();
        model.part_name = Set(payload.part_name);
        model.inventory_quantity = Set(payload.inventory_quantity);

        let updated = model.update(db).await.map_err(|e| {
            error!(part_id = id, error = %e, "Failed to update part");
            ServiceError::from(e)
        })?;

        info!(part_id = id, "Part replaced");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_part(&self, id: i32) -> Result<(), ServiceError> {
        let result = Part::delete_by_id(id)
            .exec(&*self.db_pool)
            .await
            .map_err(|e| {
                error!(part_id = id, error = %e, "Failed to delete part");
                ServiceError::from(e)
            })?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("part of {} not found", id)));
        }

        info!(part_id = id, "Part deleted");
        Ok(())
    }
}
