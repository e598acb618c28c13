use crate::services::bom::PartRequirement;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a successful scaled resolution
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BomRequirementsResponse {
    /// Name exactly as supplied in the path
    pub product_name: String,
    pub parts_required: Vec<RequiredPartLine>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RequiredPartLine {
    pub part_id: i32,
    pub part_name: String,
    /// Association quantity times the multiplier
    pub quantity: i64,
}

/// Body of an unscaled listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BomInventoryResponse {
    pub product_name: String,
    pub parts_required: Vec<InventoryPartLine>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InventoryPartLine {
    pub part_id: i32,
    pub part_name: String,
    pub inventory_quantity: i64,
}

/// `{"message": ...}` body used for deletions and non-fatal BOM results
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Product not found")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<PartRequirement> for RequiredPartLine {
    fn from(req: PartRequirement) -> Self {
        Self {
            part_id: req.part_id,
            part_name: req.part_name,
            quantity: req.quantity,
        }
    }
}

impl From<PartRequirement> for InventoryPartLine {
    fn from(req: PartRequirement) -> Self {
        Self {
            part_id: req.part_id,
            part_name: req.part_name,
            inventory_quantity: req.quantity,
        }
    }
}
