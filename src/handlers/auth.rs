// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{AdminOnly, RequireRole},
    models::auth::{LoginPayload, LoginResponse, RegisterPayload},
};

// POST /auth/login
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login bem-sucedido, devolve o token JWT", body = LoginResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    tracing::info!("Tentativa de login do usuário {}", payload.login);
    let token = app_state
        .auth_service
        .login(&payload.login, &payload.password)
        .await?;
    tracing::info!("Login bem-sucedido do usuário {}", payload.login);

    Ok(Json(LoginResponse { token }))
}

// POST /auth/register — restrito a ADMIN
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Auth",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Usuário registrado"),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Token ausente, inválido ou expirado"),
        (status = 403, description = "Papel insuficiente (exige ADMIN)"),
        (status = 409, description = "Login já existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn register(
    State(app_state): State<AppState>,
    _admin: RequireRole<AdminOnly>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    app_state
        .auth_service
        .register(&payload.login, &payload.password, payload.role)
        .await?;

    Ok((StatusCode::CREATED, "User created successfully!"))
}
