use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{db_error, expect_affected, RepoError};
use crate::models::{Activation, Completion, Task};

/// Persistence port for tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Every task in store order, active or not.
    async fn list(&self) -> Result<Vec<Task>, RepoError>;

    /// Inserts `task` (its `id_tarefa` is ignored) and returns the assigned id.
    async fn create(&self, task: &Task) -> Result<i32, RepoError>;

    /// `Ok(None)` when no row has this id.
    async fn get_by_id(&self, id: i32) -> Result<Option<Task>, RepoError>;

    /// Overwrites all mutable fields. Does not look at the activation flag.
    async fn update_by_id(&self, id: i32, task: &Task) -> Result<(), RepoError>;

    /// Flips an active row to inactive. `NotFound` if the id is absent or
    /// the row is already inactive.
    async fn soft_delete_by_id(&self, id: i32) -> Result<(), RepoError>;

    /// Active tasks whose responsible-user reference equals `user_ref`.
    async fn list_by_responsible_user(&self, user_ref: &str) -> Result<Vec<Task>, RepoError>;
}

#[derive(FromRow)]
struct TaskRow {
    id: i32,
    nome: String,
    conteudo: String,
    usuario_responsavel: String,
    finalizado: String,
}

impl TryFrom<TaskRow> for Task {
    type Error = RepoError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(Task {
            id_tarefa: row.id,
            nome_tarefa: row.nome,
            conteudo_tarefa: row.conteudo,
            usuario_responsavel_tarefa: row.usuario_responsavel,
            finalizado: Completion::try_from(row.finalizado)?,
        })
    }
}

fn into_tasks(rows: Vec<TaskRow>) -> Result<Vec<Task>, RepoError> {
    rows.into_iter().map(Task::try_from).collect()
}

/// `TaskRepository` backed by the `tarefa` table.
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, RepoError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            "SELECT id, nome, conteudo, usuario_responsavel, finalizado FROM tarefa ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list tarefa"))?;

        into_tasks(rows)
    }

    async fn create(&self, task: &Task) -> Result<i32, RepoError> {
        sqlx::query_scalar::<_, i32>(
            "INSERT INTO tarefa (nome, conteudo, usuario_responsavel, finalizado, ativo)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&task.nome_tarefa)
        .bind(&task.conteudo_tarefa)
        .bind(&task.usuario_responsavel_tarefa)
        .bind(task.finalizado.as_code())
        .bind(Activation::Active.as_code())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("insert tarefa"))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Task>, RepoError> {
        let row = sqlx::query_as::<_, TaskRow>(
            "SELECT id, nome, conteudo, usuario_responsavel, finalizado FROM tarefa WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("select tarefa by id"))?;

        row.map(Task::try_from).transpose()
    }

    async fn update_by_id(&self, id: i32, task: &Task) -> Result<(), RepoError> {
        let result = sqlx::query(
            "UPDATE tarefa
             SET nome = $1, conteudo = $2, usuario_responsavel = $3, finalizado = $4
             WHERE id = $5",
        )
        .bind(&task.nome_tarefa)
        .bind(&task.conteudo_tarefa)
        .bind(&task.usuario_responsavel_tarefa)
        .bind(task.finalizado.as_code())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_error("update tarefa"))?;

        expect_affected(result.rows_affected())
    }

    async fn soft_delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE tarefa SET ativo = $1 WHERE id = $2 AND ativo = $3")
            .bind(Activation::Inactive.as_code())
            .bind(id)
            .bind(Activation::Active.as_code())
            .execute(&self.pool)
            .await
            .map_err(db_error("soft delete tarefa"))?;

        expect_affected(result.rows_affected())
    }

    async fn list_by_responsible_user(&self, user_ref: &str) -> Result<Vec<Task>, RepoError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            "SELECT id, nome, conteudo, usuario_responsavel, finalizado
             FROM tarefa
             WHERE usuario_responsavel = $1 AND ativo = $2
             ORDER BY id",
        )
        .bind(user_ref)
        .bind(Activation::Active.as_code())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list tarefa by usuario_responsavel"))?;

        into_tasks(rows)
    }
}
