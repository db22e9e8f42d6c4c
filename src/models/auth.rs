// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Papel do usuário, mapeia o CREATE TYPE user_role do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    User,
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    pub id: i64,
    pub login: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password_hash: String,

    pub role: UserRole,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (login do usuário)
    pub iss: String, // Issuer (quem emitiu o token)
    pub exp: usize,  // Expiration time (quando o token expira)
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(length(min = 5, message = "Login must have at least 5 characters"))]
    #[schema(example = "Draven22")]
    pub login: String,

    #[validate(length(min = 8, message = "Password must have at least 8 characters"))]
    #[schema(example = "superSecret123")]
    pub password: String,
}

// Dados para registro de um novo usuário (rota restrita a ADMIN)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterPayload {
    #[validate(length(min = 5, max = 50, message = "Login must be between 5 and 50 characters"))]
    #[schema(example = "Draven22")]
    pub login: String,

    #[validate(length(min = 8, max = 100, message = "Password must be between 8 and 100 characters"))]
    #[schema(example = "MySecret123")]
    pub password: String,

    #[schema(example = "USER")]
    pub role: UserRole,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_serializa_em_maiusculas() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
        let role: UserRole = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, UserRole::User);
    }

    #[test]
    fn login_payload_rejeita_campos_curtos() {
        let payload = LoginPayload {
            login: "abc".into(),
            password: "1234".into(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("login"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn register_payload_valido_passa() {
        let payload = RegisterPayload {
            login: "Draven22".into(),
            password: "MySecret123".into(),
            role: UserRole::User,
        };
        assert!(payload.validate().is_ok());
    }
}
