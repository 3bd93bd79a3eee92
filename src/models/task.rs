use serde::{Deserialize, Serialize};
use validator::Validate;

use super::flags::Completion;

/// Represents a task as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier.
    pub id_tarefa: i32,
    /// Short title of the task.
    pub nome_tarefa: String,
    /// Free-form description.
    pub conteudo_tarefa: String,
    /// Reference to the responsible user (login or external id).
    /// Not checked against the `usuario` table.
    pub usuario_responsavel_tarefa: String,
    /// Whether the task is finished, exchanged as `"S"` / `"N"`.
    pub finalizado: Completion,
}

/// Input structure for creating or updating a task.
/// Contains validation rules for its fields.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TaskInput {
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200, message = "nome_tarefa nao pode ser vazio"))]
    pub nome_tarefa: String,

    /// Maximum length of 1000 characters; may be empty.
    #[validate(length(max = 1000))]
    pub conteudo_tarefa: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "usuario_responsavel_tarefa nao pode ser vazio"
    ))]
    pub usuario_responsavel_tarefa: String,

    pub finalizado: Completion,
}

impl Task {
    /// Creates a `Task` from its input. `id_tarefa` is `0` until the store
    /// assigns the real identifier.
    pub fn from_input(input: TaskInput) -> Self {
        Self {
            id_tarefa: 0,
            nome_tarefa: input.nome_tarefa,
            conteudo_tarefa: input.conteudo_tarefa,
            usuario_responsavel_tarefa: input.usuario_responsavel_tarefa,
            finalizado: input.finalizado,
        }
    }
}
