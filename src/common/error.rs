// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use thiserror::Error;

use crate::models::auth::UserRole;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Todos os erros de domínio sobem até aqui sem serem modificados e
// viram uma resposta HTTP estruturada num único ponto.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("One or more fields are invalid")]
    ValidationError(#[from] validator::ValidationErrors),

    // Busca por ID que não existe. Por convenção da API isso é um 400.
    #[error("No {entity} found with the provided ID: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Invalid login or password")]
    InvalidCredentials,

    // Rota exige um principal e nenhum token válido foi apresentado
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Access denied: this operation requires role {0:?}")]
    AccessDenied(UserRole),

    #[error("Username already exists: {0}")]
    LoginAlreadyExists(String),

    // Assinatura/issuer/expiração inválidos, ou subject sem usuário
    #[error("Invalid JWT token: {0}")]
    TokenValidation(String),

    // Falha ao assinar: erro fatal de configuração, nunca retentado
    #[error("Error generating JWT token: {0}")]
    TokenGeneration(#[source] jsonwebtoken::errors::Error),

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Bcrypt error: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::NotFound { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::Unauthenticated
            | AppError::TokenValidation(_) => StatusCode::UNAUTHORIZED,
            AppError::AccessDenied(_) => StatusCode::FORBIDDEN,
            AppError::LoginAlreadyExists(_) => StatusCode::CONFLICT,
            AppError::TokenGeneration(_)
            | AppError::DatabaseError(_)
            | AppError::BcryptError(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Nome curto do erro, exposto no campo "details" do corpo
    fn details(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "ValidationError",
            AppError::NotFound { .. } => "NotFoundError",
            AppError::InvalidCredentials => "InvalidCredentialsError",
            AppError::Unauthenticated => "UnauthenticatedError",
            AppError::AccessDenied(_) => "AccessDeniedError",
            AppError::LoginAlreadyExists(_) => "ConflictError",
            AppError::TokenValidation(_) => "TokenValidationError",
            AppError::TokenGeneration(_) => "TokenGenerationError",
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::BcryptError(_) => "BcryptError",
            AppError::InternalServerError(_) => "InternalServerError",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Erro interno do servidor: {:?}", self);
        }

        // Erros de validação carregam também os campos e mensagens
        if let AppError::ValidationError(ref errors) = self {
            let mut fields: Vec<String> = Vec::new();
            let mut fields_message: Vec<String> = Vec::new();
            for (field, field_errors) in errors.field_errors() {
                fields.push(field.to_string());
                fields_message.extend(
                    field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string())),
                );
            }

            let body = Json(json!({
                "timestamp": Utc::now(),
                "status": status.as_u16(),
                "title": "Bad Request: invalid fields",
                "message": self.to_string(),
                "details": self.details(),
                "fields": fields.join(","),
                "fieldsMessage": fields_message.join(","),
            }));
            return (status, body).into_response();
        }

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Não vazamos detalhes internos no corpo
            "An unexpected error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "timestamp": Utc::now(),
            "status": status.as_u16(),
            "title": status.canonical_reason().unwrap_or("Error"),
            "message": message,
            "details": self.details(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Dummy {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn status_de_cada_variante() {
        let cases = [
            (AppError::NotFound { entity: "Client", id: 7 }, StatusCode::BAD_REQUEST),
            (AppError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AppError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (AppError::TokenValidation("expired".into()), StatusCode::UNAUTHORIZED),
            (AppError::AccessDenied(UserRole::Admin), StatusCode::FORBIDDEN),
            (AppError::LoginAlreadyExists("Draven22".into()), StatusCode::CONFLICT),
        ];
        for (error, expected) in cases {
            assert_eq!(error.status(), expected);
        }
    }

    #[test]
    fn not_found_usa_mensagem_canonica() {
        let error = AppError::NotFound { entity: "Task", id: 42 };
        assert_eq!(error.to_string(), "No Task found with the provided ID: 42");
    }

    #[test]
    fn erro_de_validacao_vira_400_com_campos() {
        let errors = Dummy { name: "ab".into() }.validate().unwrap_err();
        let response = AppError::ValidationError(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
