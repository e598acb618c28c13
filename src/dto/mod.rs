//! Request payloads accepted by the CRUD endpoints.
//!
//! Field names match the stored records so clients can post back what they
//! read. Structural constraints live here as `validator` attributes; foreign
//! keys are left to the database.

pub mod bom;
pub mod catalog;
pub mod orders;

pub use bom::{
    BomInventoryResponse, BomRequirementsResponse, InventoryPartLine, MessageResponse,
    RequiredPartLine,
};
pub use catalog::{PartPayload, ProductPartAssociationPayload, ProductPayload};
pub use orders::OrderPayload;

use crate::errors::ServiceError;

/// Rejects a replace whose body names a different record than the path.
pub(crate) fn ensure_matching_id(
    entity: &str,
    path_id: i32,
    body_id: Option<i32>,
) -> Result<(), ServiceError> {
    match body_id {
        Some(id) if id != path_id => Err(ServiceError::ValidationError(format!(
            "{entity} id {id} in body does not match id {path_id} in path"
        ))),
        _ => Ok(()),
    }
}
