//! Shared setup for the HTTP integration tests.
//!
//! Builds the use-cases over in-memory repositories so the full
//! handler → use-case → repository pipeline runs without a database.
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use tarefa_api::auth::TokenIssuer;
use tarefa_api::repository::{
    InMemoryTaskRepository, InMemoryUserRepository, TaskRepository, UserRepository,
};
use tarefa_api::routes;
use tarefa_api::usecase::{AuthUseCase, TaskUseCase, UserUseCase};

pub const TEST_SECRET: &str = "integration-test-secret";

#[derive(Clone)]
pub struct TestState {
    pub users: web::Data<UserUseCase>,
    pub tasks: web::Data<TaskUseCase>,
    pub auth: web::Data<AuthUseCase>,
}

impl TestState {
    /// Fresh, empty in-memory stores.
    pub fn new() -> Self {
        Self::with_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
        )
    }

    pub fn with_repositories(
        users: Arc<dyn UserRepository>,
        tasks: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            users: web::Data::new(UserUseCase::new(users.clone())),
            tasks: web::Data::new(TaskUseCase::new(tasks)),
            auth: web::Data::new(AuthUseCase::new(users, TokenIssuer::new(TEST_SECRET))),
        }
    }

    /// Registers the use-cases and every route, like `main` does.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.tasks.clone())
            .app_data(self.auth.clone());
        routes::config(cfg);
    }
}

/// Error raised by the failing test stores.
pub fn store_down() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}
