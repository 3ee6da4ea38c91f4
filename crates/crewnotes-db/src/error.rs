//! Database-specific error types and conversions.

use crewnotes_core::error::CoreError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("invalid stored record: {0}")]
    Data(String),

    #[error("password hash error: {0}")]
    Hash(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}

impl From<DbError> for CoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id: _ } => CoreError::NotFound(format!("{entity} not found")),
            DbError::Data(msg) | DbError::Hash(msg) => CoreError::Internal(msg),
            other => CoreError::Database(other.to_string()),
        }
    }
}
