// runsql-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunsqlError {
    // --- DOMAIN ERRORS (guard checks, empty results) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, SQLite, CSV) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC / APPLICATIVE ERRORS ---
    #[error("Internal Error: {0}")]
    Internal(String),
}

// Manual implementations to keep the `?` operator ergonomic at call sites
// without duplicating enum variants.
impl From<std::io::Error> for RunsqlError {
    fn from(err: std::io::Error) -> Self {
        RunsqlError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<rusqlite::Error> for RunsqlError {
    fn from(err: rusqlite::Error) -> Self {
        RunsqlError::Infrastructure(InfrastructureError::Database(DatabaseError::Sqlite(err)))
    }
}
