use serde::{Deserialize, Serialize};
use std::fmt;

/// Soft-delete marker stored in the `ativo` column of both tables.
///
/// Rows are never physically removed; deleting a record flips it from
/// `Active` to `Inactive`. The flag never leaves the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Stored as `A`.
    Active,
    /// Stored as `I`.
    Inactive,
}

impl Activation {
    /// The single-character code persisted in the `ativo` column.
    pub fn as_code(self) -> &'static str {
        match self {
            Activation::Active => "A",
            Activation::Inactive => "I",
        }
    }
}

impl TryFrom<String> for Activation {
    type Error = FlagError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        match code.trim() {
            "A" => Ok(Activation::Active),
            "I" => Ok(Activation::Inactive),
            _ => Err(FlagError::new("ativo", code)),
        }
    }
}

/// Completion marker of a task, exchanged as the string tag `"S"` or `"N"`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Task is finished (`S`).
    #[serde(rename = "S")]
    Finished,
    /// Task is still open (`N`).
    #[serde(rename = "N")]
    Pending,
}

impl Completion {
    /// The single-character code persisted in the `finalizado` column.
    pub fn as_code(self) -> &'static str {
        match self {
            Completion::Finished => "S",
            Completion::Pending => "N",
        }
    }
}

impl TryFrom<String> for Completion {
    type Error = FlagError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        match code.trim() {
            "S" => Ok(Completion::Finished),
            "N" => Ok(Completion::Pending),
            _ => Err(FlagError::new("finalizado", code)),
        }
    }
}

/// A stored flag column held a code outside its two permitted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagError {
    pub column: &'static str,
    pub code: String,
}

impl FlagError {
    fn new(column: &'static str, code: String) -> Self {
        Self { column, code }
    }
}

impl fmt::Display for FlagError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid code {:?} in column {}", self.code, self.column)
    }
}

impl std::error::Error for FlagError {}
