// src/db/client_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::client::{Client, ClientType},
};

const CLIENT_COLUMNS: &str =
    "id, name, email, tax_id, phone, type, address_id, created_at, updated_at";

// Repositório da tabela 'clients'
#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert<'e, E>(
        &self,
        executor: E,
        name: &str,
        email: &str,
        tax_id: &str,
        phone: Option<&str>,
        client_type: ClientType,
        address_id: Option<i64>,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>(&format!(
            r#"
            INSERT INTO clients (name, email, tax_id, phone, type, address_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(email)
        .bind(tax_id)
        .bind(phone)
        .bind(client_type)
        .bind(address_id)
        .fetch_one(executor)
        .await?;

        Ok(client)
    }

    // Sobrescreve os campos escalares e a referência de endereço
    #[allow(clippy::too_many_arguments)]
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        name: &str,
        email: &str,
        tax_id: &str,
        phone: Option<&str>,
        client_type: ClientType,
        address_id: Option<i64>,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>(&format!(
            r#"
            UPDATE clients
            SET name = $2, email = $3, tax_id = $4, phone = $5,
                type = $6, address_id = $7, updated_at = now()
            WHERE id = $1
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(tax_id)
        .bind(phone)
        .bind(client_type)
        .bind(address_id)
        .fetch_one(executor)
        .await?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let maybe_client = sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maybe_client)
    }

    pub async fn find_all(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // Navegação reversa calculada por consulta, nunca guardada na entidade
    pub async fn task_ids(&self, client_id: i64) -> Result<Vec<i64>, AppError> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM tasks WHERE client_id = $1 ORDER BY id",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    // Pares (client_id, task_id) de todas as tasks, para a listagem não
    // disparar uma consulta por cliente
    pub async fn task_ids_for_all(&self) -> Result<Vec<(i64, i64)>, AppError> {
        let links = sqlx::query_as::<_, (i64, i64)>(
            "SELECT client_id, id FROM tasks ORDER BY client_id, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }
}
