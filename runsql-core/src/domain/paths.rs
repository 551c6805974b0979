// runsql-core/src/domain/paths.rs
//
// Resolves the three file-system paths the export works with. Arguments are
// taken verbatim; nothing here touches the disk, so a nonsense path only
// fails later as an I/O error.

pub const DEFAULT_DB_PATH: &str = "db/fashion_magazines.db";
pub const DEFAULT_SQL_PATH: &str = "sql/fashion_magazines.sql";
pub const DEFAULT_CSV_PATH: &str = "data/fashion_magazines.csv";

/// The `(database, sql source, csv destination)` triple for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig {
    pub db: String,
    pub sql: String,
    pub csv: String,
}

impl PathConfig {
    /// Fill missing positional arguments with the documented defaults.
    pub fn resolve(db: Option<String>, sql: Option<String>, csv: Option<String>) -> Self {
        Self {
            db: db.unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            sql: sql.unwrap_or_else(|| DEFAULT_SQL_PATH.to_string()),
            csv: csv.unwrap_or_else(|| DEFAULT_CSV_PATH.to_string()),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_defaults_when_no_args() {
        let paths = PathConfig::resolve(None, None, None);
        assert_eq!(paths.db, "db/fashion_magazines.db");
        assert_eq!(paths.sql, "sql/fashion_magazines.sql");
        assert_eq!(paths.csv, "data/fashion_magazines.csv");
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let paths = PathConfig::resolve(Some("other.db".into()), None, None);
        assert_eq!(paths.db, "other.db");
        assert_eq!(paths.sql, DEFAULT_SQL_PATH);
        assert_eq!(paths.csv, DEFAULT_CSV_PATH);
    }

    #[test]
    fn test_full_override_is_taken_verbatim() {
        let paths = PathConfig::resolve(
            Some("a.db".into()),
            Some("b.sql".into()),
            Some("does/not/exist.csv".into()),
        );
        assert_eq!(paths.db, "a.db");
        assert_eq!(paths.sql, "b.sql");
        // No validation: non-existent paths are accepted as-is.
        assert_eq!(paths.csv, "does/not/exist.csv");
    }
}
