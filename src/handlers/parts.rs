use crate::{
    dto::{MessageResponse, PartPayload},
    entities::part,
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
    path = "/api/parts/",
    tag = "parts",
    summary = "List parts",
    responses(
        (status = 200, description = "All parts with inventory", body = [part::Model]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_parts(
    State(state): State<AppState>,
) -> Result<Json<Vec<part::Model>>, ServiceError> {
    Ok(Json(state.services.parts.list_parts().await?))
}

#[utoipa::path(
    post,
    path = "/api/parts/",
    tag = "parts",
    summary = "Create part",
    request_body = PartPayload,
    responses(
        (status = 200, description = "Stored part", body = part::Model),
        (status = 409, description = "Duplicate id", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn create_part(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PartPayload>,
) -> Result<Json<part::Model>, ServiceError> {
    Ok(Json(state.services.parts.create_part(payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/parts/{id}",
    tag = "parts",
    summary = "Replace part",
    params(("id" = i32, Path, description = "Part id")),
    request_body = PartPayload,
    responses(
        (status = 200, description = "Updated part", body = part::Model),
        (status = 404, description = "Part not found", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn update_part(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<PartPayload>,
) -> Result<Json<part::Model>, ServiceError> {
    Ok(Json(state.services.parts.replace_part(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/parts/{id}",
    tag = "parts",
    summary = "Delete part",
    params(("id" = i32, Path, description = "Part id")),
    responses(
        (status = 200, description = "Part and its associations deleted", body = MessageResponse),
        (status = 404, description = "Part not found", body = crate::errors::ErrorResponse),
        (status = 422, description = "Id is not an integer", body = crate::errors::ErrorResponse),
    )
)]
pub async fn delete_part(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<MessageResponse>, ServiceError> {
    state.services.parts.delete_part(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "part of id {} deleted successfully",
        id
    ))))
}
