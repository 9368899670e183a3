use thiserror::Error;

pub mod database;
pub mod storage;
pub mod user;

pub use database::DatabaseError;
pub use storage::StorageError;
pub use user::UserError;

/// Internal error type for store, coordinator and service operations
///
/// Infrastructure errors (database, parse, storage) sit next to domain errors.
/// Not exposed via API - endpoints must convert to UserApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a validation failure on user input
    pub fn validation(message: impl Into<String>) -> Self {
        Self::User(UserError::Validation {
            message: message.into(),
        })
    }
}
