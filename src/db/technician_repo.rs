// src/db/technician_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::technician::Technician};

const TECHNICIAN_COLUMNS: &str = "id, name, phone, created_at, updated_at";

// Repositório da tabela 'technicians'
#[derive(Clone)]
pub struct TechnicianRepository {
    pool: PgPool,
}

impl TechnicianRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, name: &str, phone: Option<&str>) -> Result<Technician, AppError> {
        let technician = sqlx::query_as::<_, Technician>(&format!(
            r#"
            INSERT INTO technicians (name, phone)
            VALUES ($1, $2)
            RETURNING {TECHNICIAN_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(technician)
    }

    pub async fn update(
        &self,
        id: i64,
        name: &str,
        phone: Option<&str>,
    ) -> Result<Technician, AppError> {
        let technician = sqlx::query_as::<_, Technician>(&format!(
            r#"
            UPDATE technicians
            SET name = $2, phone = $3, updated_at = now()
            WHERE id = $1
            RETURNING {TECHNICIAN_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(technician)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Technician>, AppError> {
        let maybe_technician = sqlx::query_as::<_, Technician>(&format!(
            "SELECT {TECHNICIAN_COLUMNS} FROM technicians WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maybe_technician)
    }

    pub async fn find_all(&self) -> Result<Vec<Technician>, AppError> {
        let technicians = sqlx::query_as::<_, Technician>(&format!(
            "SELECT {TECHNICIAN_COLUMNS} FROM technicians ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(technicians)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM technicians WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
