use std::sync::Arc;

use crate::models::Task;
use crate::repository::{RepoError, TaskRepository};

#[derive(Clone)]
pub struct TaskUseCase {
    repository: Arc<dyn TaskRepository>,
}

impl TaskUseCase {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Task>, RepoError> {
        self.repository.list().await
    }

    /// Stores `task` and returns it with the store-assigned id filled in.
    pub async fn create(&self, mut task: Task) -> Result<Task, RepoError> {
        task.id_tarefa = self.repository.create(&task).await?;
        log::info!(
            "tarefa {} created for {}",
            task.id_tarefa,
            task.usuario_responsavel_tarefa
        );
        Ok(task)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Task>, RepoError> {
        self.repository.get_by_id(id).await
    }

    pub async fn update_by_id(&self, id: i32, task: &Task) -> Result<(), RepoError> {
        self.repository.update_by_id(id, task).await
    }

    pub async fn soft_delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        self.repository.soft_delete_by_id(id).await?;
        log::info!("tarefa {} deactivated", id);
        Ok(())
    }

    pub async fn list_by_responsible_user(&self, user_ref: &str) -> Result<Vec<Task>, RepoError> {
        self.repository.list_by_responsible_user(user_ref).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Completion;
    use crate::repository::InMemoryTaskRepository;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    /// Repository whose every call fails like an unreachable database.
    struct UnreachableStore;

    #[async_trait]
    impl TaskRepository for UnreachableStore {
        async fn list(&self) -> Result<Vec<Task>, RepoError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }
        async fn create(&self, _task: &Task) -> Result<i32, RepoError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }
        async fn get_by_id(&self, _id: i32) -> Result<Option<Task>, RepoError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }
        async fn update_by_id(&self, _id: i32, _task: &Task) -> Result<(), RepoError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }
        async fn soft_delete_by_id(&self, _id: i32) -> Result<(), RepoError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }
        async fn list_by_responsible_user(&self, _user_ref: &str) -> Result<Vec<Task>, RepoError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }
    }

    fn task(nome: &str) -> Task {
        Task {
            id_tarefa: 0,
            nome_tarefa: nome.to_string(),
            conteudo_tarefa: "conteudo".to_string(),
            usuario_responsavel_tarefa: "ana1".to_string(),
            finalizado: Completion::Pending,
        }
    }

    #[actix_rt::test]
    async fn test_create_and_update() {
        let usecase = TaskUseCase::new(Arc::new(InMemoryTaskRepository::new()));
        let created = usecase.create(task("Estudar")).await.unwrap();
        assert_eq!(created.id_tarefa, 1);

        let done = Task {
            finalizado: Completion::Finished,
            ..created.clone()
        };
        usecase.update_by_id(created.id_tarefa, &done).await.unwrap();
        assert_eq!(
            usecase.get_by_id(created.id_tarefa).await.unwrap(),
            Some(done)
        );
    }

    #[actix_rt::test]
    async fn test_store_errors_pass_through_unchanged() {
        let usecase = TaskUseCase::new(Arc::new(UnreachableStore));

        assert!(matches!(
            usecase.create(task("x")).await,
            Err(RepoError::Database(sqlx::Error::PoolTimedOut))
        ));
        assert!(matches!(
            usecase.get_by_id(1).await,
            Err(RepoError::Database(_))
        ));
        assert!(matches!(
            usecase.list_by_responsible_user("ana1").await,
            Err(RepoError::Database(_))
        ));
    }
}
