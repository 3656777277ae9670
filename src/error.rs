//! Error types shared by the model and storage layers.

use thiserror::Error;

/// Result type alias using footy's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure categories surfaced by storage operations.
///
/// Validation errors are raised before any write is attempted, so the
/// database is untouched. Conflicts surface when a uniqueness rule would
/// be violated; the enclosing transaction is rolled back on drop.
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed a domain rule (blank name, negative stat, unknown color).
    #[error("{0}")]
    Validation(String),

    /// A referenced id did not resolve to an existing record.
    #[error("{0} not found")]
    NotFound(String),

    /// A uniqueness or structural rule would be violated.
    #[error("{0}")]
    Conflict(String),

    /// Underlying database failure.
    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl Error {
    /// A not-found error for the given record description, e.g. "player 42".
    pub fn not_found(what: impl Into<String>) -> Self {
        Error::NotFound(what.into())
    }
}
