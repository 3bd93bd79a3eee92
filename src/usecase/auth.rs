use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::repository::{RepoError, UserRepository};

/// Why a login attempt did not produce a token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown login or wrong password; the two are not told apart.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Repository(#[from] RepoError),
    #[error("failed to sign token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
pub struct AuthUseCase {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl AuthUseCase {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Checks `login`/`senha` against the stored user and issues a token.
    ///
    /// Passwords are stored and compared in plaintext.
    pub async fn login(&self, login: &str, senha: &str) -> Result<String, AuthError> {
        let user = match self.users.get_by_login(login).await? {
            Some(user) if user.senha == senha => user,
            _ => {
                log::warn!("rejected login attempt for {:?}", login);
                return Err(AuthError::InvalidCredentials);
            }
        };

        Ok(self.tokens.issue(user.id)?)
    }
}
