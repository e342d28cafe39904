//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (constraint violations,
//! transient DB errors) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error covering the migration and introspection paths.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique constraint violation (SQLSTATE 23505).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// CHECK constraint violation (SQLSTATE 23514) — e.g. a transcript
    /// `role` outside user|assistant.
    #[error("check constraint violated: {0}")]
    CheckViolation(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A migration statement failed.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }

    /// Whether this error is a CHECK-constraint violation.
    pub fn is_check_violation(&self) -> bool {
        matches!(self, Self::CheckViolation(_))
    }

    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// Custom `From<sqlx::Error>` — NOT blanket `#[from]`.
///
/// - SQLSTATE 23505 → `Duplicate`
/// - SQLSTATE 23514 → `CheckViolation`
/// - everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23514") => {
                Self::CheckViolation(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}
