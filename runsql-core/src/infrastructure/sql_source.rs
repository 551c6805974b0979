// runsql-core/src/infrastructure/sql_source.rs

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::infrastructure::error::InfrastructureError;

/// Read the SQL source file as UTF-8 text.
///
/// A missing or unreadable file is not intercepted here; the raw I/O error
/// propagates to the caller.
pub fn load_sql<P: AsRef<Path>>(path: P) -> Result<String, InfrastructureError> {
    let path = path.as_ref();
    debug!(path = ?path, "Reading SQL source file");
    let sql = fs::read_to_string(path)?;
    Ok(sql)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_sql_returns_entire_contents() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("query.sql");
        let mut file = fs::File::create(&path)?;
        write!(file, "SELECT 1;\n-- trailing comment")?;

        let sql = load_sql(&path)?;
        assert_eq!(sql, "SELECT 1;\n-- trailing comment");
        Ok(())
    }

    #[test]
    fn test_load_sql_missing_file_propagates() -> Result<()> {
        let dir = tempdir()?;
        let result = load_sql(dir.path().join("nope.sql"));
        assert!(matches!(result, Err(InfrastructureError::Io(_))));
        Ok(())
    }
}
