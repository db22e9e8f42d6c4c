// src/models/technician.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Representa um técnico vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados de criação/atualização de técnico
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianPayload {
    #[validate(length(min = 3, message = "Name must have at least 3 characters."))]
    #[schema(example = "David")]
    pub name: String,

    #[schema(example = "(00) 0000-0000")]
    pub phone: Option<String>,
}

// Resposta de técnico (sem o grafo de tasks, evitando ciclos)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
}

impl From<Technician> for TechnicianResponse {
    fn from(technician: Technician) -> Self {
        Self {
            id: technician.id,
            name: technician.name,
            phone: technician.phone,
        }
    }
}
