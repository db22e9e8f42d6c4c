// src/services/auth.rs

use bcrypt::{hash, verify};

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{UserModel, UserRole},
    services::token::TokenService,
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    token_service: TokenService,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, token_service: TokenService) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    // =============================
    // LOGIN
    // =============================
    pub async fn login(&self, login: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_login(login)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação do bcrypt fora do runtime assíncrono
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.token_service.create_token(&user.login)
    }

    // =============================
    // REGISTER NEW USER
    // =============================
    // A rota que chama isto é restrita a ADMIN.
    pub async fn register(
        &self,
        login: &str,
        password: &str,
        role: UserRole,
    ) -> Result<UserModel, AppError> {
        if self.user_repo.find_by_login(login).await?.is_some() {
            tracing::warn!("Registro recusado: login {} já existe", login);
            return Err(AppError::LoginAlreadyExists(login.to_string()));
        }

        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        // Corrida entre o find e o insert é coberta pela UNIQUE do banco,
        // que o repositório traduz para o mesmo erro de conflito.
        let user = self.user_repo.create(login, &hashed_password, role).await?;
        tracing::info!("Usuário criado com sucesso: {}", user.login);

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sqlx::PgPool;

    fn token_service() -> TokenService {
        TokenService::new("segredo-de-teste".into(), "suport-api".into(), 60)
    }

    fn service(pool: &PgPool) -> AuthService {
        AuthService::new(UserRepository::new(pool.clone()), token_service())
    }

    #[sqlx::test]
    async fn registro_seguido_de_login_emite_token_com_o_login_no_subject(
        pool: PgPool,
    ) -> anyhow::Result<()> {
        let service = service(&pool);
        service
            .register("Draven22", "superSecret123", UserRole::User)
            .await?;

        let token = service.login("Draven22", "superSecret123").await?;
        assert_eq!(token_service().token_validation(&token)?, "Draven22");
        Ok(())
    }

    #[sqlx::test]
    async fn login_com_senha_errada_e_recusado(pool: PgPool) -> anyhow::Result<()> {
        let service = service(&pool);
        service
            .register("Draven22", "superSecret123", UserRole::User)
            .await?;

        let result = service.login("Draven22", "outraSenha456").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
        Ok(())
    }

    #[sqlx::test]
    async fn registro_com_login_duplicado_e_conflito(pool: PgPool) -> anyhow::Result<()> {
        let service = service(&pool);
        service
            .register("Draven22", "superSecret123", UserRole::User)
            .await?;

        let result = service
            .register("Draven22", "outraSenha456", UserRole::Admin)
            .await;
        assert!(matches!(result, Err(AppError::LoginAlreadyExists(_))));
        Ok(())
    }
}
