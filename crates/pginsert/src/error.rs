//! Error types for pginsert

use crate::ident::IdentRole;
use thiserror::Error;

/// Result type alias for pginsert operations
pub type InsertResult<T> = Result<T, InsertError>;

/// Errors raised while building an INSERT statement.
///
/// Every error is returned before any SQL text is produced; a failed build
/// never yields a partial statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    /// A table or column name is not a legal unquoted SQL identifier
    #[error(
        "{role} name \"{name}\" is invalid. Use letters, numbers, underscore; must start with a letter or underscore."
    )]
    InvalidIdentifier { name: String, role: IdentRole },

    /// The input does not have the shape the entry point expects
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A `Serialize` value could not be turned into a record
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl InsertError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(name: impl Into<String>, role: IdentRole) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            role,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this is an invalid identifier error
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier { .. })
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// The role of the rejected identifier, if this is an identifier error.
    pub fn ident_role(&self) -> Option<IdentRole> {
        match self {
            Self::InvalidIdentifier { role, .. } => Some(*role),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for InsertError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
