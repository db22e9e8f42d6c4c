// src/handlers/technician.rs

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
    models::technician::{TechnicianPayload, TechnicianResponse},
};

// POST /technicians
#[utoipa::path(
    post,
    path = "/technicians",
    tag = "Technicians",
    request_body = TechnicianPayload,
    responses(
        (status = 201, description = "Técnico criado", body = TechnicianResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_technician(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Json(payload): Json<TechnicianPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let technician = app_state.technician_service.save(payload).await?;
    Ok((StatusCode::CREATED, Json(technician)))
}

// GET /technicians
#[utoipa::path(
    get,
    path = "/technicians",
    tag = "Technicians",
    responses(
        (status = 200, description = "Lista de técnicos", body = Vec<TechnicianResponse>),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_technicians(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let technicians = app_state.technician_service.find_all().await?;
    Ok((StatusCode::OK, Json(technicians)))
}

// GET /technicians/{id}
#[utoipa::path(
    get,
    path = "/technicians/{id}",
    tag = "Technicians",
    params(("id" = i64, Path, description = "ID do técnico")),
    responses(
        (status = 200, description = "Técnico encontrado", body = TechnicianResponse),
        (status = 400, description = "Nenhum técnico com o ID informado"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_technician_by_id(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let technician = app_state.technician_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(technician)))
}

// PUT /technicians/{id}
#[utoipa::path(
    put,
    path = "/technicians/{id}",
    tag = "Technicians",
    params(("id" = i64, Path, description = "ID do técnico")),
    request_body = TechnicianPayload,
    responses(
        (status = 200, description = "Técnico atualizado", body = TechnicianResponse),
        (status = 400, description = "Dados inválidos ou ID inexistente"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_technician(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<TechnicianPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let technician = app_state.technician_service.update(payload, id).await?;
    Ok((StatusCode::OK, Json(technician)))
}

// DELETE /technicians/{id}
#[utoipa::path(
    delete,
    path = "/technicians/{id}",
    tag = "Technicians",
    params(("id" = i64, Path, description = "ID do técnico")),
    responses(
        (status = 204, description = "Técnico removido"),
        (status = 400, description = "Nenhum técnico com o ID informado"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_technician(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.technician_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
