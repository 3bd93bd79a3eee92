//! Data access layer.
//!
//! Each resource has a repository port (`UserRepository`, `TaskRepository`)
//! with two adapters: a PostgreSQL one used by the server and an in-memory
//! one used by tests and local experiments. Only this module knows the row
//! layout of the `usuario` and `tarefa` tables.

pub mod memory;
pub mod task;
pub mod user;

use crate::models::flags::FlagError;

pub use memory::{InMemoryTaskRepository, InMemoryUserRepository};
pub use task::{PgTaskRepository, TaskRepository};
pub use user::{PgUserRepository, UserRepository};

/// Errors surfaced by repositories.
///
/// Absence on a read is not an error (reads return `Option`); `NotFound` is
/// only produced by conditioned writes that matched zero rows.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// An update or soft-delete affected no rows.
    #[error("record not found")]
    NotFound,
    /// Connection or statement failure reported by the store.
    #[error("{0}")]
    Database(#[from] sqlx::Error),
    /// A stored flag column held an unexpected code.
    #[error(transparent)]
    InvalidFlag(#[from] FlagError),
}

/// Logs a store failure for `operation` and wraps it.
pub(crate) fn db_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepoError {
    move |error| {
        log::error!("{} failed: {}", operation, error);
        RepoError::Database(error)
    }
}

/// Maps the affected-row count of a conditioned write to the not-found signal.
pub(crate) fn expect_affected(rows_affected: u64) -> Result<(), RepoError> {
    if rows_affected == 0 {
        Err(RepoError::NotFound)
    } else {
        Ok(())
    }
}
