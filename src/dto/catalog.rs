use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ProductPayload {
    /// Assigned by the store when omitted on create
    #[serde(default)]
    pub product_id: Option<i32>,
    /// Display name; lookups match it ignoring case and whitespace
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct PartPayload {
    #[serde(default)]
    pub part_id: Option<i32>,
    #[validate(length(min = 1, max = 1000))]
    pub part_name: String,
    #[serde(default)]
    pub inventory_quantity: i32,
}

/// One bill-of-materials line: `quantity` units of `part_id` per product.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ProductPartAssociationPayload {
    #[serde(default)]
    pub id: Option<i32>,
    pub product_id: i32,
    pub part_id: i32,
    pub quantity: i32,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must contain a non-whitespace character".into());
        return Err(err);
    }
    Ok(())
}
