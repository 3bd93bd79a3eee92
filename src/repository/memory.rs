//! In-memory repositories.
//!
//! They follow the same contract as the PostgreSQL adapters (store order is
//! insertion order, ids start at 1, soft-delete only flips active rows) so
//! handler and use-case tests can run without a database.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{RepoError, TaskRepository, UserRepository};
use crate::models::{Activation, Task, User};

struct Stored<T> {
    record: T,
    ativo: Activation,
}

struct Table<T> {
    rows: Vec<Stored<T>>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn insert(&mut self, assign: impl FnOnce(i32) -> T) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(Stored {
            record: assign(id),
            ativo: Activation::Active,
        });
        id
    }

    fn soft_delete(&mut self, matches: impl Fn(&T) -> bool) -> Result<(), RepoError> {
        match self
            .rows
            .iter_mut()
            .find(|row| matches(&row.record) && row.ativo == Activation::Active)
        {
            Some(row) => {
                row.ativo = Activation::Inactive;
                Ok(())
            }
            None => Err(RepoError::NotFound),
        }
    }

    fn activation(&self, matches: impl Fn(&T) -> bool) -> Option<Activation> {
        self.rows
            .iter()
            .find(|row| matches(&row.record))
            .map(|row| row.ativo)
    }
}

/// `UserRepository` kept in process memory.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current activation flag of a user, `None` if the id was never assigned.
    pub async fn activation_of(&self, id: i32) -> Option<Activation> {
        self.table.lock().await.activation(|user| user.id == id)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().map(|row| row.record.clone()).collect())
    }

    async fn create(&self, user: &User) -> Result<i32, RepoError> {
        let mut table = self.table.lock().await;
        Ok(table.insert(|id| User {
            id,
            ..user.clone()
        }))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .find(|row| row.record.id == id)
            .map(|row| row.record.clone()))
    }

    async fn update_by_id(&self, id: i32, user: &User) -> Result<(), RepoError> {
        let mut table = self.table.lock().await;
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.record.id == id)
            .ok_or(RepoError::NotFound)?;
        row.record = User {
            id,
            ..user.clone()
        };
        Ok(())
    }

    async fn soft_delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        self.table.lock().await.soft_delete(|user| user.id == id)
    }

    async fn get_by_login(&self, login: &str) -> Result<Option<User>, RepoError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .find(|row| row.record.login == login)
            .map(|row| row.record.clone()))
    }
}

/// `TaskRepository` kept in process memory.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    table: Mutex<Table<Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current activation flag of a task, `None` if the id was never assigned.
    pub async fn activation_of(&self, id: i32) -> Option<Activation> {
        self.table.lock().await.activation(|task| task.id_tarefa == id)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, RepoError> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().map(|row| row.record.clone()).collect())
    }

    async fn create(&self, task: &Task) -> Result<i32, RepoError> {
        let mut table = self.table.lock().await;
        Ok(table.insert(|id_tarefa| Task {
            id_tarefa,
            ..task.clone()
        }))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Task>, RepoError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .find(|row| row.record.id_tarefa == id)
            .map(|row| row.record.clone()))
    }

    async fn update_by_id(&self, id: i32, task: &Task) -> Result<(), RepoError> {
        let mut table = self.table.lock().await;
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.record.id_tarefa == id)
            .ok_or(RepoError::NotFound)?;
        row.record = Task {
            id_tarefa: id,
            ..task.clone()
        };
        Ok(())
    }

    async fn soft_delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        self.table
            .lock()
            .await
            .soft_delete(|task| task.id_tarefa == id)
    }

    async fn list_by_responsible_user(&self, user_ref: &str) -> Result<Vec<Task>, RepoError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .filter(|row| {
                row.ativo == Activation::Active && row.record.usuario_responsavel_tarefa == user_ref
            })
            .map(|row| row.record.clone())
            .collect())
    }
}
