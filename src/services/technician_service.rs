// src/services/technician_service.rs

use crate::{
    common::error::AppError,
    db::TechnicianRepository,
    models::technician::{Technician, TechnicianPayload, TechnicianResponse},
};

#[derive(Clone)]
pub struct TechnicianService {
    technician_repo: TechnicianRepository,
}

impl TechnicianService {
    pub fn new(technician_repo: TechnicianRepository) -> Self {
        Self { technician_repo }
    }

    // =============================
    // CREATE
    // =============================
    pub async fn save(&self, payload: TechnicianPayload) -> Result<TechnicianResponse, AppError> {
        let technician = self
            .technician_repo
            .insert(&payload.name, payload.phone.as_deref())
            .await?;
        Ok(technician.into())
    }

    // =============================
    // READ
    // =============================
    pub async fn find_by_id_or_fail(&self, id: i64) -> Result<Technician, AppError> {
        self.technician_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound { entity: "Technician", id })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<TechnicianResponse, AppError> {
        Ok(self.find_by_id_or_fail(id).await?.into())
    }

    pub async fn find_all(&self) -> Result<Vec<TechnicianResponse>, AppError> {
        let technicians = self.technician_repo.find_all().await?;
        Ok(technicians.into_iter().map(Into::into).collect())
    }

    // =============================
    // UPDATE
    // =============================
    pub async fn update(
        &self,
        payload: TechnicianPayload,
        id: i64,
    ) -> Result<TechnicianResponse, AppError> {
        self.find_by_id_or_fail(id).await?;
        let technician = self
            .technician_repo
            .update(id, &payload.name, payload.phone.as_deref())
            .await?;
        Ok(technician.into())
    }

    // =============================
    // DELETE
    // =============================
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.find_by_id_or_fail(id).await?;
        self.technician_repo.delete(id).await
    }
}
