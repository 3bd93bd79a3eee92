use std::sync::Arc;

use crate::models::User;
use crate::repository::{RepoError, UserRepository};

#[derive(Clone)]
pub struct UserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<User>, RepoError> {
        self.repository.list().await
    }

    /// Stores `user` and returns it with the store-assigned id filled in.
    pub async fn create(&self, mut user: User) -> Result<User, RepoError> {
        user.id = self.repository.create(&user).await?;
        log::info!("usuario {} created", user.id);
        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        self.repository.get_by_id(id).await
    }

    pub async fn update_by_id(&self, id: i32, user: &User) -> Result<(), RepoError> {
        self.repository.update_by_id(id, user).await
    }

    pub async fn soft_delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        self.repository.soft_delete_by_id(id).await?;
        log::info!("usuario {} deactivated", id);
        Ok(())
    }
}
