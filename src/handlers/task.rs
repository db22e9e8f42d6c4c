// src/handlers/task.rs

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
    models::task::{TaskPayload, TaskResponse},
};

// POST /tasks
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "Tasks",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Task criada", body = TaskResponse),
        (status = 400, description = "Dados inválidos ou clientId/technicianIds inexistentes"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_task(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Json(payload): Json<TaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let task = app_state.task_service.save(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

// GET /tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "Lista de tasks", body = Vec<TaskResponse>),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_tasks(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let tasks = app_state.task_service.find_all().await?;
    Ok((StatusCode::OK, Json(tasks)))
}

// GET /tasks/{id}
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(("id" = i64, Path, description = "ID da task")),
    responses(
        (status = 200, description = "Task encontrada", body = TaskResponse),
        (status = 400, description = "Nenhuma task com o ID informado"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_task_by_id(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let task = app_state.task_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(task)))
}

// PUT /tasks/{id}
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(("id" = i64, Path, description = "ID da task")),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Task atualizada", body = TaskResponse),
        (status = 400, description = "Dados inválidos ou ID inexistente"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_task(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let task = app_state.task_service.update(payload, id).await?;
    Ok((StatusCode::OK, Json(task)))
}

// DELETE /tasks/{id}
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(("id" = i64, Path, description = "ID da task")),
    responses(
        (status = 204, description = "Task removida"),
        (status = 400, description = "Nenhuma task com o ID informado"),
        (status = 401, description = "Token ausente, inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_task(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.task_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
