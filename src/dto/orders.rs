use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct OrderPayload {
    #[serde(default)]
    pub order_id: Option<i32>,
    pub product_id: i32,
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i32,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 1))]
    pub status: String,
}
