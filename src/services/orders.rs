use crate::{
    db::{sync_serial_sequence, DbPool},
    dto::{ensure_matching_id, OrderPayload},
    entities::order::{self, Entity as Order},
    errors::ServiceError,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Service for managing orders
#[derive(Clone)]
pub struct OrderService {
    db_pool: Arc<DbPool>,
}

impl OrderService {
    /// Creates a new order service instance
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Lists every order in id order
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<order::Model>, ServiceError> {
        Order::find()
            .order_by_asc(order::Column::OrderId)
            .all(&*self.db_pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list orders");
                ServiceError::from(e)
            })
    }

    /// Records a new order against an existing product
    #[instrument(skip(self))]
    pub async fn create_order(&self, payload: OrderPayload) -> Result<order::Model, ServiceError> {
        let explicit_id = payload.order_id.is_some();
        let model = order::ActiveModel {
            order_id: payload.order_id.map(Set).unwrap_or(NotSet),
            product_id: Set(payload.product_id),
            quantity: Set(payload.quantity),
            order_date: Set(payload.order_date),
            status: Set(payload.status),
        };

        let created = model.insert(&*self.db_pool).await.map_err(|e| {
            error!(product_id = payload.product_id, error = %e, "Failed to create order");
            ServiceError::from(e)
        })?;

        if explicit_id {
            sync_serial_sequence::<Order, _>(&*self.db_pool, order::Column::OrderId).await?;
        }

        info!(
            order_id = created.order_id,
            product_id = created.product_id,
            quantity = created.quantity,
            "Order created"
        );
        Ok(created)
    }

    /// Overwrites every field of an existing order
    #[instrument(skip(self))]
    pub async fn replace_order(
        &self,
        id: i32,
        payload: OrderPayload,
    ) -> Result<order::Model, ServiceError> {
        ensure_matching_id("order", id, payload.order_id)?;
        let db = &*self.db_pool;

        let existing = Order::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("order of {} not found", id)))?;

        let mut model: order::ActiveModel = existing.into();
        model.product_id = Set(payload.product_id);
        model.quantity = Set(payload.quantity);
        model.order_date = Set(payload.order_date);
        model.status = Set(payload.status);

        let updated = model.update(db).await.map_err(|e| {
            error!(order_id = id, error = %e, "Failed to update order");
            ServiceError::from(e)
        })?;

        info!(order_id = id, status = %updated.status, "Order replaced");
        Ok(updated)
    }

    /// Deletes an order by id
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: i32) -> Result<(), ServiceError> {
        let result = Order::delete_by_id(id)
            .exec(&*self.db_pool)
            .await
            .map_err(|e| {
                error!(order_id = id, error = %e, "Failed to delete order");
                ServiceError::from(e)
            })?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("order of {} not found", id)));
        }

        info!(order_id = id, "Order deleted");
        Ok(())
    }
}
