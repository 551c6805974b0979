// runsql-core/src/infrastructure/csv_writer.rs

use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use crate::domain::result::QueryResult;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{atomic_write, ensure_parent_dir};

/// Serialize a tabular result to a CSV file.
///
/// The header row carries the column names in projection order; no index
/// column is added. NULL cells become empty fields. Missing parent
/// directories are created, and an existing file at the destination is
/// replaced without warning.
pub fn write_csv<P: AsRef<Path>>(
    result: &QueryResult,
    destination: P,
) -> Result<(), InfrastructureError> {
    let destination = destination.as_ref();
    ensure_parent_dir(destination)?;

    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(&result.columns)?;
    for row in &result.rows {
        wtr.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }

    let buffer = wtr
        .into_inner()
        .map_err(|e| InfrastructureError::Io(std::io::Error::other(e.to_string())))?;
    atomic_write(destination, buffer)?;

    debug!(path = ?destination, rows = result.row_count(), "Wrote CSV");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn sample_result() -> QueryResult {
        QueryResult::new(
            vec!["Customer".into(), "Amount Due".into()],
            vec![
                vec![Some("Ida Kiefer".into()), Some("$426.00".into())],
                vec![Some("Brooke Robles".into()), None],
            ],
        )
    }

    #[test]
    fn test_write_csv_header_and_rows() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");

        write_csv(&sample_result(), &path)?;

        let content = fs::read_to_string(&path)?;
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Customer,Amount Due"));
        assert_eq!(lines.next(), Some("Ida Kiefer,$426.00"));
        // NULL serializes as an empty field, not the string "None".
        assert_eq!(lines.next(), Some("Brooke Robles,"));
        assert_eq!(lines.next(), None);
        Ok(())
    }

    #[test]
    fn test_write_csv_creates_missing_directories() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("reports/monthly/out.csv");

        write_csv(&sample_result(), &path)?;

        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_write_csv_overwrites_entirely() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content that must disappear")?;

        write_csv(&sample_result(), &path)?;

        let content = fs::read_to_string(&path)?;
        assert!(content.starts_with("Customer,Amount Due"));
        assert!(!content.contains("stale"));
        Ok(())
    }

    #[test]
    fn test_write_csv_quotes_embedded_commas() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        let result = QueryResult::new(
            vec!["Customer".into()],
            vec![vec![Some("Kiefer, Ida".into())]],
        );

        write_csv(&result, &path)?;

        let content = fs::read_to_string(&path)?;
        assert!(content.contains("\"Kiefer, Ida\""));
        Ok(())
    }
}
