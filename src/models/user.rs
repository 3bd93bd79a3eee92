use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user as returned by the API.
///
/// The activation flag is deliberately absent: it is a storage concern and
/// never part of the transfer representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub nome: String,
    pub login: String,
    pub senha: String,
}

/// Body accepted by `POST /usuario` and `PUT /usuario/{id}`.
///
/// Every field is required and unknown fields (including `id`) are rejected,
/// so create and update validate identically.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UserInput {
    #[validate(length(min = 1, max = 100, message = "nome nao pode ser vazio"))]
    pub nome: String,
    #[validate(length(min = 1, max = 50, message = "login nao pode ser vazio"))]
    pub login: String,
    #[validate(length(min = 1, max = 100, message = "senha nao pode ser vazia"))]
    pub senha: String,
}

impl User {
    /// Builds the record for an input whose identifier is not yet known.
    /// The id stays `0` until the store assigns one.
    pub fn from_input(input: UserInput) -> Self {
        Self {
            id: 0,
            nome: input.nome,
            login: input.login,
            senha: input.senha,
        }
    }
}
