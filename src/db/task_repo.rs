// src/db/task_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::task::{Task, TaskPriority, TaskStatus},
};

const TASK_COLUMNS: &str =
    "id, title, description, status, priority, client_id, created_at, updated_at";

// Repositório das tabelas 'tasks' e 'task_technicians'. As escritas recebem
// um executor: a service resolve as associações e só então abre a transação
// que grava a task e as linhas de junção de uma vez.
#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        title: &str,
        description: Option<&str>,
        status: TaskStatus,
        priority: TaskPriority,
        client_id: i64,
    ) -> Result<Task, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            INSERT INTO tasks (title, description, status, priority, client_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(title)
        .bind(description)
        .bind(status)
        .bind(priority)
        .bind(client_id)
        .fetch_one(executor)
        .await?;

        Ok(task)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        title: &str,
        description: Option<&str>,
        status: TaskStatus,
        priority: TaskPriority,
        client_id: i64,
    ) -> Result<Task, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, status = $4, priority = $5,
                client_id = $6, updated_at = now()
            WHERE id = $1
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(status)
        .bind(priority)
        .bind(client_id)
        .fetch_one(executor)
        .await?;

        Ok(task)
    }

    pub async fn clear_technicians<'e, E>(&self, executor: E, task_id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM task_technicians WHERE task_id = $1")
            .bind(task_id)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn link_technicians<'e, E>(
        &self,
        executor: E,
        task_id: i64,
        technician_ids: &[i64],
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if technician_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO task_technicians (task_id, technician_id)
            SELECT $1, unnest($2::bigint[])
            "#,
        )
        .bind(task_id)
        .bind(technician_ids)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn technician_ids(&self, task_id: i64) -> Result<Vec<i64>, AppError> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT technician_id
            FROM task_technicians
            WHERE task_id = $1
            ORDER BY technician_id
            "#,
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    // Todos os vínculos task-técnico de uma vez, para a listagem não
    // disparar uma consulta por task
    pub async fn technician_ids_for_all(&self) -> Result<Vec<(i64, i64)>, AppError> {
        let links = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT task_id, technician_id
            FROM task_technicians
            ORDER BY task_id, technician_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError> {
        let maybe_task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maybe_task)
    }

    pub async fn find_all(&self) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        // As linhas de task_technicians caem junto via ON DELETE CASCADE
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
