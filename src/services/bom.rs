//! Bill-of-materials resolution.
//!
//! Given a product name and an optional production multiplier, walks the
//! product's part associations in id order and reports what each part
//! contributes. Lookups go through [`BomStore`] so the walk can run against
//! the database or an in-memory fixture.

use crate::{
    db::DbPool,
    entities::{
        part::{self, Entity as Part},
        product::{self, Entity as Product},
        product_part_association::{self, Entity as ProductPartAssociation},
    },
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::{num::NonZeroU32, sync::Arc};
use tracing::{debug, error, info, instrument, warn};

/// Canonical form used to match product names: all whitespace removed,
/// lowercased.
pub fn normalize_product_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read-only lookups the resolver needs from persistence.
#[async_trait]
pub trait BomStore: Send + Sync {
    /// Id of the first product (lowest id) whose normalized name equals `name_key`.
    async fn find_product_id_by_name_key(&self, name_key: &str) -> Result<Option<i32>, DbErr>;

    /// Associations of a product in ascending association id.
    async fn associations_for_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<product_part_association::Model>, DbErr>;

    async fn find_part(&self, part_id: i32) -> Result<Option<part::Model>, DbErr>;
}

/// [`BomStore`] backed by the shared connection pool.
#[derive(Clone)]
pub struct SeaOrmBomStore {
    db_pool: Arc<DbPool>,
}

impl SeaOrmBomStore {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BomStore for SeaOrmBomStore {
    async fn find_product_id_by_name_key(&self, name_key: &str) -> Result<Option<i32>, DbErr> {
        // Compared after normalization, lowest id first.
        let names: Vec<(i32, String)> = Product::find()
            .select_only()
            .column(product::Column::ProductId)
            .column(product::Column::Name)
            .order_by_asc(product::Column::ProductId)
            .into_tuple()
            .all(&*self.db_pool)
            .await?;

        Ok(names
            .into_iter()
            .find(|(_, name)| normalize_product_name(name) == name_key)
            .map(|(id, _)| id))
    }

    async fn associations_for_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<product_part_association::Model>, DbErr> {
        ProductPartAssociation::find()
            .filter(product_part_association::Column::ProductId.eq(product_id))
            .order_by_asc(product_part_association::Column::Id)
            .all(&*self.db_pool)
            .await
    }

    async fn find_part(&self, part_id: i32) -> Result<Option<part::Model>, DbErr> {
        Part::find_by_id(part_id).one(&*self.db_pool).await
    }
}

/// How association quantities are turned into the reported quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Report each part's current inventory; no sufficiency check.
    Unscaled,
    /// Report `association.quantity * n` and require that much on hand.
    Scaled(NonZeroU32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartRequirement {
    pub part_id: i32,
    pub part_name: String,
    /// Required amount when scaled, on-hand inventory when unscaled.
    pub quantity: i64,
}

/// Domain result of a resolution. Only [`BomOutcome::Resolved`] carries parts;
/// the first missing or short part ends the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BomOutcome {
    Resolved(Vec<PartRequirement>),
    ProductNotFound,
    PartUnavailable {
        part_id: i32,
    },
    InsufficientInventory {
        part_name: String,
        required: i64,
        available: i32,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BomError {
    #[error("BOM resolution failed: {0}")]
    Internal(String),
}

fn storage_fault(stage: &'static str) -> impl Fn(DbErr) -> BomError {
    move |e| {
        error!(stage, error = %e, "Storage fault during BOM resolution");
        BomError::Internal(format!("{stage} failed"))
    }
}

#[derive(Clone)]
pub struct BomResolver {
    store: Arc<dyn BomStore>,
}

impl BomResolver {
    pub fn new(store: Arc<dyn BomStore>) -> Self {
        Self { store }
    }

    /// Resolver over the live database.
    pub fn with_pool(db_pool: Arc<DbPool>) -> Self {
        Self::new(Arc::new(SeaOrmBomStore::new(db_pool)))
    }

    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        product_name: &str,
        scaling: Scaling,
    ) -> Result<BomOutcome, BomError> {
        let name_key = normalize_product_name(product_name);

        let Some(product_id) = self
            .store
            .find_product_id_by_name_key(&name_key)
            .await
            .map_err(storage_fault("product lookup"))?
        else {
            info!(name_key = %name_key, "No product matches name");
            return Ok(BomOutcome::ProductNotFound);
        };

        let associations = self
            .store
            .associations_for_product(product_id)
            .await
            .map_err(storage_fault("association lookup"))?;

        debug!(
            product_id,
            lines = associations.len(),
            "Resolving bill of materials"
        );

        let mut requirements = Vec::with_capacity(associations.len());
        for association in associations {
            let Some(part) = self
                .store
                .find_part(association.part_id)
                .await
                .map_err(storage_fault("part lookup"))?
            else {
                warn!(
                    product_id,
                    part_id = association.part_id,
                    "Association references a missing part"
                );
                return Ok(BomOutcome::PartUnavailable {
                    part_id: association.part_id,
                });
            };

            let quantity = match scaling {
                Scaling::Unscaled => i64::from(part.inventory_quantity),
                Scaling::Scaled(multiplier) => {
                    let required = i64::from(association.quantity) * i64::from(multiplier.get());
                    if i64::from(part.inventory_quantity) < required {
                        info!(
                            part_id = part.part_id,
                            required,
                            available = part.inventory_quantity,
                            "Insufficient inventory"
                        );
                        return Ok(BomOutcome::InsufficientInventory {
                            part_name: part.part_name,
                            required,
                            available: part.inventory_quantity,
                        });
                    }
                    required
                }
            };

            requirements.push(PartRequirement {
                part_id: part.part_id,
                part_name: part.part_name,
                quantity,
            });
        }

        Ok(BomOutcome::Resolved(requirements))
    }
}
