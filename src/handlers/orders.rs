use crate::{
    dto::{MessageResponse, OrderPayload},
    entities::order,
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
    path = "/api/orders/",
    tag = "orders",
    summary = "List orders",
    responses(
        (status = 200, description = "All orders", body = [order::Model]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<order::Model>>, ServiceError> {
    let orders = state.services.orders.list_orders().await?;
    Ok(Json(orders))
}

#[utoipa::path(
    post,
    path = "/api/orders/",
    tag = "orders",
    summary = "Create order",
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Stored order", body = order::Model),
        (status = 409, description = "Unknown product or duplicate id", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderPayload>,
) -> Result<Json<order::Model>, ServiceError> {
    let created = state.services.orders.create_order(payload).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "orders",
    summary = "Replace order",
    params(("id" = i32, Path, description = "Order id")),
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Updated order", body = order::Model),
        (status = 404, description = "Order not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unknown product", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<OrderPayload>,
) -> Result<Json<order::Model>, ServiceError> {
    let updated = state.services.orders.replace_order(id, payload).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "orders",
    summary = "Delete order",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted", body = MessageResponse),
        (status = 404, description = "Order not found", body = crate::errors::ErrorResponse),
        (status = 422, description = "Id is not an integer", body = crate::errors::ErrorResponse),
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<MessageResponse>, ServiceError> {
    state.services.orders.delete_order(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "order of id {} deleted successfully",
        id
    ))))
}
