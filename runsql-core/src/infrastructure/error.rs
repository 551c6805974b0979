// runsql-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("SQLite Engine Error: {0}")]
    #[diagnostic(
        code(runsql::infra::database::sqlite),
        help("An error occurred inside the SQL engine.")
    )]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(runsql::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CSV SERIALIZATION ---
    #[error("CSV Serialization Error: {0}")]
    #[diagnostic(code(runsql::infra::csv))]
    Csv(#[from] csv::Error),
}

// Manual implementation for shortcuts (e.g. `?` operator on rusqlite calls)
impl From<rusqlite::Error> for InfrastructureError {
    fn from(err: rusqlite::Error) -> Self {
        InfrastructureError::Database(DatabaseError::Sqlite(err))
    }
}
