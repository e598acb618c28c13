//! `/api/ppa` endpoints: product-part associations.

use crate::{
    dto::{MessageResponse, ProductPartAssociationPayload},
    entities::product_part_association,
    errors::ServiceError,
    handlers::common::{ValidatedJson, ValidatedPath},
    AppState,
};
use axum::{
    extract::State,
    Json,
};

#[utoipa::path(
    get,
    path = "/api/ppa/",
    tag = "associations",
    summary = "List product-part associations",
    responses(
        (status = 200, description = "All associations", body = [product_part_association::Model]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_associations(
    State(state): State<AppState>,
) -> Result<Json<Vec<product_part_association::Model>>, ServiceError> {
    Ok(Json(state.services.associations.list_associations().await?))
}

#[utoipa::path(
    post,
    path = "/api/ppa/",
    tag = "associations",
    summary = "Create product-part association",
    request_body = ProductPartAssociationPayload,
    responses(
        (status = 200, description = "Stored association", body = product_part_association::Model),
        (status = 409, description = "Unknown product or part", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn create_association(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductPartAssociationPayload>,
) -> Result<Json<product_part_association::Model>, ServiceError> {
    Ok(Json(
        state
            .services
            .associations
            .create_association(payload)
            .await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/ppa/{id}",
    tag = "associations",
    summary = "Replace product-part association",
    params(("id" = i32, Path, description = "Association id")),
    request_body = ProductPartAssociationPayload,
    responses(
        (status = 200, description = "Updated association", body = product_part_association::Model),
        (status = 404, description = "Association not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unknown product or part", body = crate::errors::ErrorResponse),
    )
)]
pub async fn update_association(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<ProductPartAssociationPayload>,
) -> Result<Json<product_part_association::Model>, ServiceError> {
    Ok(Json(
        state
            .services
            .associations
            .replace_association(id, payload)
            .await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/ppa/{id}",
    tag = "associations",
    summary = "Delete product-part association",
    params(("id" = i32, Path, description = "Association id")),
    responses(
        (status = 200, description = "Association deleted", body = MessageResponse),
        (status = 404, description = "Association not found", body = crate::errors::ErrorResponse),
        (status = 422, description = "Id is not an integer", body = crate::errors::ErrorResponse),
    )
)]
pub async fn delete_association(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<MessageResponse>, ServiceError> {
    state.services.associations.delete_association(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "PPA of id {} deleted successfully",
        id
    ))))
}
