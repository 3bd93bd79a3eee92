//!
//! # Custom Error Handling
//!
//! This module defines `AppError`, the only place where outcomes of the
//! lower layers are turned into HTTP status codes.
//!
//! `AppError` implements `actix_web::error::ResponseError`, rendering every
//! variant as a `{"message": ...}` JSON body. `From` implementations for
//! `RepoError`, `AuthError` and `validator::ValidationErrors` allow handlers
//! to use the `?` operator.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidationErrors;

use crate::repository::RepoError;
use crate::usecase::AuthError;

/// Body of every status or error response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Represents all errors a handler can return.
#[derive(Debug)]
pub enum AppError {
    /// Authentication failed (HTTP 401). The message never says which
    /// credential was wrong.
    Unauthorized(String),
    /// Malformed path or body (HTTP 400).
    BadRequest(String),
    /// The addressed record does not exist or is already deleted (HTTP 404).
    NotFound(String),
    /// Unexpected server-side failure (HTTP 500).
    InternalServerError(String),
    /// Store failure (HTTP 500); the store's message is passed through.
    DatabaseError(String),
    /// Body was well-formed but a field failed validation (HTTP 422).
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl AppError {
    fn message(&self) -> &str {
        match self {
            AppError::Unauthorized(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::InternalServerError(msg)
            | AppError::DatabaseError(msg)
            | AppError::ValidationError(msg) => msg,
        }
    }

    /// Maps a repository error, using `not_found` as the message when the
    /// write matched no rows.
    pub fn from_repo(error: RepoError, not_found: &str) -> Self {
        match error {
            RepoError::NotFound => AppError::NotFound(not_found.to_string()),
            other => other.into(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) | AppError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.message()))
    }
}

/// Converts `RepoError` into `AppError`.
///
/// `NotFound` gets a generic message; handlers that know the resource use
/// `AppError::from_repo` instead.
impl From<RepoError> for AppError {
    fn from(error: RepoError) -> AppError {
        match error {
            RepoError::NotFound => AppError::NotFound("Registro nao encontrado".into()),
            RepoError::Database(e) => AppError::DatabaseError(e.to_string()),
            RepoError::InvalidFlag(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> AppError {
        match error {
            AuthError::InvalidCredentials => AppError::Unauthorized("Credenciais inválidas".into()),
            AuthError::Repository(e) => e.into(),
            AuthError::Token(e) => {
                AppError::InternalServerError(format!("Failed to generate token: {}", e))
            }
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`.
///
/// The detailed validation messages are preserved.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_responses() {
        let error = AppError::Unauthorized("Credenciais inválidas".into());
        assert_eq!(error.error_response().status(), 401);

        let error = AppError::BadRequest("Invalid input".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::NotFound("Resource not found".into());
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::DatabaseError("connection refused".into());
        assert_eq!(error.error_response().status(), 500);

        let error = AppError::ValidationError("nome".into());
        assert_eq!(error.error_response().status(), 422);
    }

    #[test]
    fn test_repo_error_mapping() {
        match AppError::from_repo(RepoError::NotFound, "Tarefa não encontrada") {
            AppError::NotFound(msg) => assert_eq!(msg, "Tarefa não encontrada"),
            other => panic!("unexpected {:?}", other),
        }

        match AppError::from_repo(RepoError::Database(sqlx::Error::PoolTimedOut), "unused") {
            AppError::DatabaseError(msg) => {
                assert_eq!(msg, sqlx::Error::PoolTimedOut.to_string())
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_store_error_during_login_is_not_unauthorized() {
        let error: AppError = AuthError::Repository(RepoError::Database(
            sqlx::Error::PoolTimedOut,
        ))
        .into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
