// src/config.rs

use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        AddressRepository, ClientRepository, TaskRepository, TechnicianRepository, UserRepository,
    },
    services::{
        address_service::AddressService, auth::AuthService, client_service::ClientService,
        task_service::TaskService, technician_service::TechnicianService, token::TokenService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação.
// Imutável depois do startup: configuração e grafo de serviços.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub token_service: TokenService,
    pub user_repo: UserRepository,
    pub auth_service: AuthService,
    pub address_service: AddressService,
    pub client_service: ClientService,
    pub technician_service: TechnicianService,
    pub task_service: TaskService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;
        let jwt_issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "suport-api".to_string());
        let jwt_expiration_minutes = env::var("JWT_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<i64>()
            .context("JWT_EXPIRATION_MINUTES deve ser um número inteiro")?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o grafo de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let address_repo = AddressRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let technician_repo = TechnicianRepository::new(db_pool.clone());
        let task_repo = TaskRepository::new(db_pool.clone());

        let token_service = TokenService::new(jwt_secret, jwt_issuer, jwt_expiration_minutes);
        let auth_service = AuthService::new(user_repo.clone(), token_service.clone());

        let address_service = AddressService::new(address_repo.clone(), db_pool.clone());
        let client_service = ClientService::new(client_repo, address_repo, db_pool.clone());
        let technician_service = TechnicianService::new(technician_repo);
        let task_service = TaskService::new(
            task_repo,
            client_service.clone(),
            technician_service.clone(),
            db_pool.clone(),
        );

        Ok(Self {
            db_pool,
            token_service,
            user_repo,
            auth_service,
            address_service,
            client_service,
            technician_service,
            task_service,
        })
    }
}
