// src/models/task.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

// Mapeia o CREATE TYPE task_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "task_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Open,
    InProgress,
    Completed,
    Closed,
}

// Mapeia o CREATE TYPE task_priority do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "task_priority", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

// Representa uma task vinda do banco de dados.
// A associação com técnicos fica na tabela task_technicians, nunca aqui.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub client_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados de criação/atualização de task: associações chegam como IDs
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[validate(length(min = 3, message = "Task title must have at least 3 characters."))]
    #[schema(example = "Printer with printing problem")]
    pub title: String,

    #[schema(example = "when I try to print more than 2 sheets I get an error")]
    pub description: Option<String>,

    #[schema(example = "OPEN")]
    pub status: TaskStatus,

    #[schema(example = "MEDIUM")]
    pub priority: TaskPriority,

    #[schema(example = 1)]
    pub client_id: i64,

    // Ausente ou vazio significa "nenhum técnico", não é erro
    #[schema(example = json!([2, 7]))]
    pub technician_ids: Option<Vec<i64>>,
}

// Resposta de task: cliente e técnicos achatados para IDs
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    #[schema(example = 2)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[schema(example = 1)]
    pub client_id: i64,
    #[schema(example = json!([2, 7]))]
    pub technician_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_e_prioridade_usam_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        let priority: TaskPriority = serde_json::from_str("\"URGENT\"").unwrap();
        assert_eq!(priority, TaskPriority::Urgent);
    }

    #[test]
    fn payload_sem_technician_ids_e_aceito() {
        let payload: TaskPayload = serde_json::from_value(serde_json::json!({
            "title": "Printer with printing problem",
            "status": "OPEN",
            "priority": "HIGH",
            "clientId": 1
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert!(payload.technician_ids.is_none());
    }

    #[test]
    fn titulo_curto_e_rejeitado() {
        let payload = TaskPayload {
            title: "ab".into(),
            description: None,
            status: TaskStatus::Open,
            priority: TaskPriority::Low,
            client_id: 1,
            technician_ids: None,
        };
        assert!(payload.validate().is_err());
    }
}
