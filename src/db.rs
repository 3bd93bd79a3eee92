//! PostgreSQL pool construction.
//!
//! The pool is built once at startup and handed to each repository; nothing
//! else holds a connection.

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;

const CREATE_USUARIO: &str = "CREATE TABLE IF NOT EXISTS usuario (
    id SERIAL PRIMARY KEY,
    nome VARCHAR(100) NOT NULL,
    login VARCHAR(50) NOT NULL,
    senha VARCHAR(100) NOT NULL,
    ativo CHAR(1) NOT NULL DEFAULT 'A'
)";

const CREATE_TAREFA: &str = "CREATE TABLE IF NOT EXISTS tarefa (
    id SERIAL PRIMARY KEY,
    nome VARCHAR(200) NOT NULL,
    conteudo VARCHAR(1000) NOT NULL,
    usuario_responsavel VARCHAR(100) NOT NULL,
    finalizado CHAR(1) NOT NULL DEFAULT 'N',
    ativo CHAR(1) NOT NULL DEFAULT 'A'
)";

/// Opens the connection pool and checks the database is reachable.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    log::info!(
        "connected to database (max {} connections)",
        config.database_max_connections
    );
    Ok(pool)
}

/// Creates the `usuario` and `tarefa` tables if they do not exist yet.
///
/// Existing tables are left untouched; this is not a migration mechanism.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USUARIO).execute(pool).await?;
    sqlx::query(CREATE_TAREFA).execute(pool).await?;
    Ok(())
}
