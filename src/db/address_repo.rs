// src/db/address_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::address::{Address, AddressPayload},
};

const ADDRESS_COLUMNS: &str =
    "id, street, number, complement, district, city, state, postal_code, created_at, updated_at";

// Repositório da tabela 'addresses'. Os métodos de escrita recebem um
// executor para poderem participar da transação do chamador.
#[derive(Clone)]
pub struct AddressRepository {
    pool: PgPool,
}

impl AddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert<'e, E>(&self, executor: E, data: &AddressPayload) -> Result<Address, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let address = sqlx::query_as::<_, Address>(&format!(
            r#"
            INSERT INTO addresses (street, number, complement, district, city, state, postal_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(&data.street)
        .bind(&data.number)
        .bind(&data.complement)
        .bind(&data.district)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.postal_code)
        .fetch_one(executor)
        .await?;

        Ok(address)
    }

    // Sobrescreve todos os campos escalares do endereço
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        data: &AddressPayload,
    ) -> Result<Address, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let address = sqlx::query_as::<_, Address>(&format!(
            r#"
            UPDATE addresses
            SET street = $2, number = $3, complement = $4, district = $5,
                city = $6, state = $7, postal_code = $8, updated_at = now()
            WHERE id = $1
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&data.street)
        .bind(&data.number)
        .bind(&data.complement)
        .bind(&data.district)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.postal_code)
        .fetch_one(executor)
        .await?;

        Ok(address)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Address>, AppError> {
        let maybe_address = sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maybe_address)
    }

    pub async fn find_all(&self) -> Result<Vec<Address>, AppError> {
        let addresses = sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(addresses)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
