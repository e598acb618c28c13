use crate::{
    dto::{MessageResponse, ProductPayload},
    entities::product,
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
    path = "/api/products/",
    tag = "products",
    summary = "List products",
    responses(
        (status = 200, description = "All products", body = [product::Model]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<product::Model>>, ServiceError> {
    Ok(Json(state.services.products.list_products().await?))
}

#[utoipa::path(
    post,
    path = "/api/products/",
    tag = "products",
    summary = "Create product",
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Stored product", body = product::Model),
        (status = 409, description = "Duplicate id", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductPayload>,
) -> Result<Json<product::Model>, ServiceError> {
    Ok(Json(state.services.products.create_product(payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    summary = "Replace product",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Updated product", body = product::Model),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<ProductPayload>,
) -> Result<Json<product::Model>, ServiceError> {
    Ok(Json(
        state.services.products.replace_product(id, payload).await?,
    ))
}

/// Removing a product also removes its bill of materials and its orders.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    summary = "Delete product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse),
        (status = 422, description = "Id is not an integer", body = crate::errors::ErrorResponse),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<MessageResponse>, ServiceError> {
    state.services.products.delete_product(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "product of id {} deleted successfully",
        id
    ))))
}
