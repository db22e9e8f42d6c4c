// src/db/user_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::auth::{UserModel, UserRole},
};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um usuário pelo seu login
    pub async fn find_by_login(&self, login: &str) -> Result<Option<UserModel>, AppError> {
        let maybe_user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, login, password_hash, role, created_at, updated_at
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maybe_user)
    }

    // Cria um novo usuário, com tratamento específico para logins duplicados
    pub async fn create(
        &self,
        login: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<UserModel, AppError> {
        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (login, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, login, password_hash, role, created_at, updated_at
            "#,
        )
        .bind(login)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::LoginAlreadyExists(login.to_string());
                }
            }
            e.into()
        })?;

        Ok(user)
    }
}
