// runsql-core/src/domain/guard.rs

use crate::domain::error::DomainError;

/// The scaffold comment shipped in an unedited SQL source file.
pub const SQL_PLACEHOLDER: &str = "-- Add your SQL here";

/// Reject a SQL source that was never filled in.
///
/// Exact equality only: the loaded text must be byte-identical to the
/// placeholder, or empty, to be rejected. No trimming or normalization is
/// applied, so a file that merely contains the placeholder among other text
/// passes the guard.
pub fn check_sql_source(sql: &str) -> Result<(), DomainError> {
    if sql == SQL_PLACEHOLDER || sql.is_empty() {
        return Err(DomainError::PlaceholderSql);
    }
    Ok(())
}
