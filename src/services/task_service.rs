// src/services/task_service.rs

use std::collections::{BTreeSet, HashMap};

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::TaskRepository,
    models::task::{Task, TaskPayload, TaskResponse},
    services::{client_service::ClientService, technician_service::TechnicianService},
};

// Orquestra a consistência das associações da task: o cliente e cada
// técnico são resolvidos por ID antes de qualquer escrita. Qualquer ID
// não resolvível aborta a operação inteira, sem escrita parcial.
#[derive(Clone)]
pub struct TaskService {
    task_repo: TaskRepository,
    client_service: ClientService,
    technician_service: TechnicianService,
    pool: PgPool,
}

impl TaskService {
    pub fn new(
        task_repo: TaskRepository,
        client_service: ClientService,
        technician_service: TechnicianService,
        pool: PgPool,
    ) -> Self {
        Self {
            task_repo,
            client_service,
            technician_service,
            pool,
        }
    }

    // technician_ids ausente ou vazio significa conjunto vazio, não erro.
    // Duplicatas colapsam: a associação é um conjunto.
    fn normalize_technician_ids(ids: Option<Vec<i64>>) -> Vec<i64> {
        ids.unwrap_or_default()
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    async fn resolve_associations(&self, payload: &TaskPayload) -> Result<Vec<i64>, AppError> {
        self.client_service
            .find_by_id_or_fail(payload.client_id)
            .await?;

        let technician_ids = Self::normalize_technician_ids(payload.technician_ids.clone());
        for technician_id in &technician_ids {
            self.technician_service
                .find_by_id_or_fail(*technician_id)
                .await?;
        }

        Ok(technician_ids)
    }

    // =============================
    // CREATE
    // =============================
    pub async fn save(&self, payload: TaskPayload) -> Result<TaskResponse, AppError> {
        let technician_ids = self.resolve_associations(&payload).await?;

        // Todas as resoluções passaram: uma única transação grava a task
        // e as linhas de junção.
        let mut tx = self.pool.begin().await?;

        let task = self
            .task_repo
            .insert(
                &mut *tx,
                &payload.title,
                payload.description.as_deref(),
                payload.status,
                payload.priority,
                payload.client_id,
            )
            .await?;

        self.task_repo
            .link_technicians(&mut *tx, task.id, &technician_ids)
            .await?;

        tx.commit().await?;

        Ok(Self::to_response(task, technician_ids))
    }

    // =============================
    // READ
    // =============================
    pub async fn find_by_id_or_fail(&self, id: i64) -> Result<Task, AppError> {
        self.task_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound { entity: "Task", id })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<TaskResponse, AppError> {
        let task = self.find_by_id_or_fail(id).await?;
        let technician_ids = self.task_repo.technician_ids(task.id).await?;
        Ok(Self::to_response(task, technician_ids))
    }

    pub async fn find_all(&self) -> Result<Vec<TaskResponse>, AppError> {
        let tasks = self.task_repo.find_all().await?;

        // Uma única consulta traz todos os vínculos, agrupados aqui por task
        let mut technicians_by_task: HashMap<i64, Vec<i64>> = HashMap::new();
        for (task_id, technician_id) in self.task_repo.technician_ids_for_all().await? {
            technicians_by_task
                .entry(task_id)
                .or_default()
                .push(technician_id);
        }

        let mut responses = Vec::with_capacity(tasks.len());
        for task in tasks {
            let technician_ids = technicians_by_task.remove(&task.id).unwrap_or_default();
            responses.push(Self::to_response(task, technician_ids));
        }
        Ok(responses)
    }

    // =============================
    // UPDATE
    // =============================
    // Sobrescreve os escalares e re-resolve as associações do zero
    pub async fn update(&self, payload: TaskPayload, id: i64) -> Result<TaskResponse, AppError> {
        self.find_by_id_or_fail(id).await?;
        let technician_ids = self.resolve_associations(&payload).await?;

        let mut tx = self.pool.begin().await?;

        let task = self
            .task_repo
            .update(
                &mut *tx,
                id,
                &payload.title,
                payload.description.as_deref(),
                payload.status,
                payload.priority,
                payload.client_id,
            )
            .await?;

        self.task_repo.clear_technicians(&mut *tx, id).await?;
        self.task_repo
            .link_technicians(&mut *tx, id, &technician_ids)
            .await?;

        tx.commit().await?;

        Ok(Self::to_response(task, technician_ids))
    }

    // =============================
    // DELETE
    // =============================
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.find_by_id_or_fail(id).await?;
        self.task_repo.delete(id).await
    }

    // Cliente e técnicos achatados para IDs na resposta
    fn to_response(task: Task, technician_ids: Vec<i64>) -> TaskResponse {
        TaskResponse {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            client_id: task.client_id,
            technician_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        db::{AddressRepository, ClientRepository, TechnicianRepository},
        models::task::{TaskPriority, TaskStatus},
    };

    #[test]
    fn technician_ids_ausente_vira_conjunto_vazio() {
        assert!(TaskService::normalize_technician_ids(None).is_empty());
        assert!(TaskService::normalize_technician_ids(Some(Vec::new())).is_empty());
    }

    #[test]
    fn technician_ids_colapsa_duplicatas_e_ordena() {
        let ids = TaskService::normalize_technician_ids(Some(vec![7, 2, 7, 2, 5]));
        assert_eq!(ids, vec![2, 5, 7]);
    }

    fn service(pool: &PgPool) -> TaskService {
        let client_service = ClientService::new(
            ClientRepository::new(pool.clone()),
            AddressRepository::new(pool.clone()),
            pool.clone(),
        );
        let technician_service = TechnicianService::new(TechnicianRepository::new(pool.clone()));
        TaskService::new(
            TaskRepository::new(pool.clone()),
            client_service,
            technician_service,
            pool.clone(),
        )
    }

    fn payload(client_id: i64, technician_ids: Option<Vec<i64>>) -> TaskPayload {
        TaskPayload {
            title: "Impressora não imprime".into(),
            description: None,
            status: TaskStatus::Open,
            priority: TaskPriority::Medium,
            client_id,
            technician_ids,
        }
    }

    async fn seed_client(pool: &PgPool) -> i64 {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO clients (name, email, tax_id, type)
            VALUES ('Google', 'contact@google.com', '12.345.678/0001-00', 'BUSINESS')
            RETURNING id
            "#,
        )
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn seed_technician(pool: &PgPool, name: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("INSERT INTO technicians (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn count(pool: &PgPool, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT count(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test]
    async fn criar_task_com_cliente_inexistente_nao_grava_nada(
        pool: PgPool,
    ) -> anyhow::Result<()> {
        let service = service(&pool);

        let result = service.save(payload(999, None)).await;
        assert!(matches!(
            result,
            Err(AppError::NotFound { entity: "Client", id: 999 })
        ));

        assert_eq!(count(&pool, "tasks").await, 0);
        Ok(())
    }

    #[sqlx::test]
    async fn criar_task_com_tecnico_inexistente_nao_grava_nada(
        pool: PgPool,
    ) -> anyhow::Result<()> {
        let service = service(&pool);
        let client_id = seed_client(&pool).await;
        let technician_id = seed_technician(&pool, "David").await;

        let result = service
            .save(payload(client_id, Some(vec![technician_id, 999])))
            .await;
        assert!(matches!(
            result,
            Err(AppError::NotFound { entity: "Technician", id: 999 })
        ));

        // Nem a task nem as linhas de junção podem ter sido gravadas
        assert_eq!(count(&pool, "tasks").await, 0);
        assert_eq!(count(&pool, "task_technicians").await, 0);
        Ok(())
    }

    #[sqlx::test]
    async fn segundo_delete_da_mesma_task_falha_not_found(pool: PgPool) -> anyhow::Result<()> {
        let service = service(&pool);
        let client_id = seed_client(&pool).await;
        let task = service.save(payload(client_id, None)).await?;

        service.delete(task.id).await?;

        let result = service.delete(task.id).await;
        assert!(matches!(
            result,
            Err(AppError::NotFound { entity: "Task", .. })
        ));
        Ok(())
    }

    #[sqlx::test]
    async fn find_all_agrupa_os_tecnicos_por_task(pool: PgPool) -> anyhow::Result<()> {
        let service = service(&pool);
        let client_id = seed_client(&pool).await;
        let first_tech = seed_technician(&pool, "David").await;
        let second_tech = seed_technician(&pool, "Alice").await;

        let with_both = service
            .save(payload(client_id, Some(vec![second_tech, first_tech])))
            .await?;
        let alone = service.save(payload(client_id, None)).await?;

        let all = service.find_all().await?;
        assert_eq!(all.len(), 2);

        let found = all.iter().find(|t| t.id == with_both.id).unwrap();
        assert_eq!(found.technician_ids, vec![first_tech, second_tech]);

        let found = all.iter().find(|t| t.id == alone.id).unwrap();
        assert!(found.technician_ids.is_empty());
        Ok(())
    }
}
