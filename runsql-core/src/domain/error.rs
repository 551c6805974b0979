// runsql-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("SQL source file has not been filled in")]
    #[diagnostic(
        code(runsql::domain::placeholder),
        help("Replace the placeholder comment in the SQL file with a real statement.")
    )]
    PlaceholderSql,

    #[error("query returned no rows")]
    #[diagnostic(
        code(runsql::domain::empty_result),
        help("Check that the database contains matching data.")
    )]
    EmptyResult,
}
