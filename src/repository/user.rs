use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{db_error, expect_affected, RepoError};
use crate::models::{Activation, User};

/// Persistence port for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user in store order, active or not.
    async fn list(&self) -> Result<Vec<User>, RepoError>;

    /// Inserts `user` (its `id` is ignored) and returns the assigned id.
    async fn create(&self, user: &User) -> Result<i32, RepoError>;

    /// `Ok(None)` when no row has this id.
    async fn get_by_id(&self, id: i32) -> Result<Option<User>, RepoError>;

    /// Overwrites nome, login and senha. Does not look at the activation flag.
    async fn update_by_id(&self, id: i32, user: &User) -> Result<(), RepoError>;

    /// Flips an active row to inactive. `NotFound` if the id is absent or
    /// the row is already inactive.
    async fn soft_delete_by_id(&self, id: i32) -> Result<(), RepoError>;

    /// `Ok(None)` when no row has this login.
    async fn get_by_login(&self, login: &str) -> Result<Option<User>, RepoError>;
}

#[derive(FromRow)]
struct UserRow {
    id: i32,
    nome: String,
    login: String,
    senha: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            nome: row.nome,
            login: row.login,
            senha: row.senha,
        }
    }
}

/// `UserRepository` backed by the `usuario` table.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, nome, login, senha FROM usuario ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list usuario"))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: &User) -> Result<i32, RepoError> {
        sqlx::query_scalar::<_, i32>(
            "INSERT INTO usuario (nome, login, senha, ativo) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&user.nome)
        .bind(&user.login)
        .bind(&user.senha)
        .bind(Activation::Active.as_code())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("insert usuario"))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, nome, login, senha FROM usuario WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("select usuario by id"))?;

        Ok(row.map(User::from))
    }

    async fn update_by_id(&self, id: i32, user: &User) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE usuario SET nome = $1, login = $2, senha = $3 WHERE id = $4")
            .bind(&user.nome)
            .bind(&user.login)
            .bind(&user.senha)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("update usuario"))?;

        expect_affected(result.rows_affected())
    }

    async fn soft_delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE usuario SET ativo = $1 WHERE id = $2 AND ativo = $3")
            .bind(Activation::Inactive.as_code())
            .bind(id)
            .bind(Activation::Active.as_code())
            .execute(&self.pool)
            .await
            .map_err(db_error("soft delete usuario"))?;

        expect_affected(result.rows_affected())
    }

    async fn get_by_login(&self, login: &str) -> Result<Option<User>, RepoError> {
        // login is unique by convention only; the oldest row wins.
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, nome, login, senha FROM usuario WHERE login = $1 ORDER BY id LIMIT 1",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("select usuario by login"))?;

        Ok(row.map(User::from))
    }
}
