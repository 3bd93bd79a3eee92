pub mod token;

use serde::{Deserialize, Serialize};

// Re-export necessary items
pub use token::{Claims, TokenIssuer};

/// Represents the payload for a login request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    /// The user's login handle.
    pub login: String,
    /// The user's password, compared verbatim.
    pub senha: String,
}

/// Response structure after a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed session token.
    pub token: String,
}
