// src/services/address_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::AddressRepository,
    models::address::{Address, AddressPayload, AddressResponse},
};

#[derive(Clone)]
pub struct AddressService {
    address_repo: AddressRepository,
    pool: PgPool,
}

impl AddressService {
    pub fn new(address_repo: AddressRepository, pool: PgPool) -> Self {
        Self { address_repo, pool }
    }

    // =============================
    // CREATE
    // =============================
    pub async fn save(&self, payload: AddressPayload) -> Result<AddressResponse, AppError> {
        let address = self.address_repo.insert(&self.pool, &payload).await?;
        Ok(address.into())
    }

    // =============================
    // READ
    // =============================
    // Toda operação que precisa de um endereço existente passa por aqui,
    // garantindo um formato único de mensagem de "não encontrado".
    pub async fn find_by_id_or_fail(&self, id: i64) -> Result<Address, AppError> {
        self.address_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound { entity: "Address", id })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<AddressResponse, AppError> {
        Ok(self.find_by_id_or_fail(id).await?.into())
    }

    pub async fn find_all(&self) -> Result<Vec<AddressResponse>, AppError> {
        let addresses = self.address_repo.find_all().await?;
        Ok(addresses.into_iter().map(Into::into).collect())
    }

    // =============================
    // UPDATE
    // =============================
    pub async fn update(
        &self,
        payload: AddressPayload,
        id: i64,
    ) -> Result<AddressResponse, AppError> {
        self.find_by_id_or_fail(id).await?;
        let address = self.address_repo.update(&self.pool, id, &payload).await?;
        Ok(address.into())
    }

    // =============================
    // DELETE
    // =============================
    // Deletar um ID inexistente falha em vez de ser um no-op
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.find_by_id_or_fail(id).await?;
        self.address_repo.delete(id).await
    }
}
