use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "parts")]
#[schema(as = Part)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub part_id: i32,
    pub part_name: String,
    /// Units on hand. Expected to stay non-negative but not enforced.
    pub inventory_quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_part_association::Entity")]
    ProductAssociations,
}

impl Related<super::product_part_association::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductAssociations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
