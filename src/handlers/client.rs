// src/handlers/client.rs

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
    models::client::{ClientPayload, ClientResponse},
};

// POST /clients
#[utoipa::path(
    post,
    path = "/clients",
    tag = "Clients",
    request_body = ClientPayload,
    responses(
        (status = 201, description = "Cliente criado", body = ClientResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let client = app_state.client_service.save(payload).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

// GET /clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = "Clients",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<ClientResponse>),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_clients(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state.client_service.find_all().await?;
    Ok((StatusCode::OK, Json(clients)))
}

// GET /clients/{id}
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i64, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente encontrado", body = ClientResponse),
        (status = 400, description = "Nenhum cliente com o ID informado"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_client_by_id(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state.client_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(client)))
}

// PUT /clients/{id}
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i64, Path, description = "ID do cliente")),
    request_body = ClientPayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = ClientResponse),
        (status = 400, description = "Dados inválidos ou ID inexistente"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let client = app_state.client_service.update(payload, id).await?;
    Ok((StatusCode::OK, Json(client)))
}

// DELETE /clients/{id}
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i64, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente removido"),
        (status = 400, description = "Nenhum cliente com o ID informado"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_client(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.client_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
