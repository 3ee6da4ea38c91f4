//! Error types for the CrewNotes system.

use thiserror::Error;

/// Shared error taxonomy. The message in the first three variants is
/// client-facing and is returned verbatim in the HTTP response body;
/// `Database` and `Internal` are logged and surfaced as a generic 500.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested entity absent, or a listed collection is empty.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness or referential invariant would be violated.
    #[error("{0}")]
    Conflict(String),

    /// Missing or malformed required input.
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
