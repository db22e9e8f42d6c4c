// src/handlers/address.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::address::{AddressPayload, AddressResponse},
};

// POST /addresses
#[utoipa::path(
    post,
    path = "/addresses",
    tag = "Addresses",
    request_body = AddressPayload,
    responses(
        (status = 201, description = "Endereço criado", body = AddressResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_address(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Json(payload): Json<AddressPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let address = app_state.address_service.save(payload).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

// GET /addresses
#[utoipa::path(
    get,
    path = "/addresses",
    tag = "Addresses",
    responses(
        (status = 200, description = "Lista de endereços", body = Vec<AddressResponse>),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_addresses(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let addresses = app_state.address_service.find_all().await?;
    Ok((StatusCode::OK, Json(addresses)))
}

// GET /addresses/{id}
#[utoipa::path(
    get,
    path = "/addresses/{id}",
    tag = "Addresses",
    params(("id" = i64, Path, description = "ID do endereço")),
    responses(
        (status = 200, description = "Endereço encontrado", body = AddressResponse),
        (status = 400, description = "Nenhum endereço com o ID informado"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_address_by_id(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let address = app_state.address_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(address)))
}

// PUT /addresses/{id}
#[utoipa::path(
    put,
    path = "/addresses/{id}",
    tag = "Addresses",
    params(("id" = i64, Path, description = "ID do endereço")),
    request_body = AddressPayload,
    responses(
        (status = 200, description = "Endereço atualizado", body = AddressResponse),
        (status = 400, description = "Dados inválidos ou ID inexistente"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_address(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<AddressPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let address = app_state.address_service.update(payload, id).await?;
    Ok((StatusCode::OK, Json(address)))
}

// DELETE /addresses/{id}
#[utoipa::path(
    delete,
    path = "/addresses/{id}",
    tag = "Addresses",
    params(("id" = i64, Path, description = "ID do endereço")),
    responses(
        (status = 204, description = "Endereço removido"),
        (status = 400, description = "Nenhum endereço com o ID informado"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_address(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.address_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
