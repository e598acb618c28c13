//! Bill-of-materials queries.
//!
//! Domain outcomes such as an unknown product or short inventory are normal
//! answers here and come back as `200` with a `message` body. Only resolver
//! faults produce a `500`.

use crate::{
    dto::{
        BomInventoryResponse, BomRequirementsResponse, InventoryPartLine, MessageResponse,
        RequiredPartLine,
    },
    errors::ServiceError,
    services::bom::{BomError, BomOutcome, PartRequirement, Scaling},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::num::NonZeroU32;
use tracing::error;

fn parse_multiplier(raw: &str) -> Result<NonZeroU32, ServiceError> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        ServiceError::ValidationError(format!("multiplier must be an integer, got {:?}", raw))
    })?;
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            ServiceError::ValidationError(format!("multiplier must be positive, got {}", value))
        })
}

/// Maps a resolution to its HTTP response, building the success body with `lines`.
fn outcome_response<B: serde::Serialize>(
    result: Result<BomOutcome, BomError>,
    lines: impl FnOnce(Vec<PartRequirement>) -> B,
) -> Response {
    match result {
        Ok(BomOutcome::Resolved(parts)) => Json(lines(parts)).into_response(),
        Ok(BomOutcome::ProductNotFound) => {
            Json(MessageResponse::new("Product not found")).into_response()
        }
        Ok(BomOutcome::PartUnavailable { .. }) => {
            Json(MessageResponse::new("Not available")).into_response()
        }
        Ok(BomOutcome::InsufficientInventory { part_name, .. }) => Json(MessageResponse::new(
            format!("Not enough {} available", part_name),
        ))
        .into_response(),
        Err(e) => {
            error!(error = %e, "BOM resolution failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Internal Server Error")),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/product/{name}/{multiplier}/parts",
    tag = "bom",
    summary = "Parts required to build a product",
    description = "Scales each bill-of-materials line by `multiplier` and checks that every part has enough inventory. Product names match ignoring case and whitespace.",
    params(
        ("name" = String, Path, description = "Product name"),
        ("multiplier" = u32, Path, description = "Number of units to build (positive)"),
    ),
    responses(
        (status = 200, description = "Required parts, or a message naming why the build is not possible", body = BomRequirementsResponse),
        (status = 422, description = "Multiplier is not a positive integer", body = crate::errors::ErrorResponse),
        (status = 500, description = "Resolution failed", body = MessageResponse),
    )
)]
pub async fn scaled_parts(
    State(state): State<AppState>,
    Path((name, multiplier)): Path<(String, String)>,
) -> Result<Response, ServiceError> {
    let multiplier = parse_multiplier(&multiplier)?;
    let result = state
        .services
        .bom
        .resolve(&name, Scaling::Scaled(multiplier))
        .await;

    Ok(outcome_response(result, |parts| BomRequirementsResponse {
        product_name: name,
        parts_required: parts.into_iter().map(RequiredPartLine::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/product/{name}/parts",
    tag = "bom",
    summary = "Parts of a product with current inventory",
    params(("name" = String, Path, description = "Product name")),
    responses(
        (status = 200, description = "Bill of materials with on-hand inventory, or a message", body = BomInventoryResponse),
        (status = 500, description = "Resolution failed", body = MessageResponse),
    )
)]
pub async fn product_parts(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let result = state.services.bom.resolve(&name, Scaling::Unscaled).await;

    outcome_response(result, |parts| BomInventoryResponse {
        product_name: name,
        parts_required: parts.into_iter().map(InventoryPartLine::from).collect(),
    })
}
