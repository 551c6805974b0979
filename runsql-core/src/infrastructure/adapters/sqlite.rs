// runsql-core/src/infrastructure/adapters/sqlite.rs

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use tracing::debug;

use crate::domain::result::QueryResult;
use crate::error::RunsqlError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::Connector;

/// Gateway to a SQLite database file.
///
/// The connection is owned for the lifetime of the struct and released on
/// drop, whichever exit path the caller takes. Opening a path that does not
/// exist creates an empty database (SQLite semantics); a schema mismatch then
/// surfaces later at query time.
pub struct SqliteConnector {
    conn: Connection,
}

impl SqliteConnector {
    pub fn open(db_path: &str) -> Result<Self, InfrastructureError> {
        let conn = if db_path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(db_path)?
        };
        debug!(path = db_path, "Opened SQLite database");
        Ok(Self { conn })
    }
}

impl Connector for SqliteConnector {
    fn fetch(&self, query: &str) -> Result<QueryResult, RunsqlError> {
        let mut stmt = self.conn.prepare(query)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_owned)
            .collect();
        let column_count = columns.len();

        let mut out = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                let cell = match row.get_ref(idx)? {
                    ValueRef::Null => None,
                    ValueRef::Integer(n) => Some(n.to_string()),
                    ValueRef::Real(f) => Some(f.to_string()),
                    ValueRef::Text(s) => Some(String::from_utf8_lossy(s).into_owned()),
                    ValueRef::Blob(b) => Some(hex::encode(b)),
                };
                cells.push(cell);
            }
            out.push(cells);
        }

        Ok(QueryResult::new(columns, out))
    }

    fn engine_name(&self) -> &str {
        "sqlite"
    }
}
