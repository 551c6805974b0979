// runsql-core/src/ports/connector.rs

// This file defines what the application needs from a database, without
// knowing how it is done. The application layer only ever talks to this
// trait; the concrete engine lives in infrastructure/adapters.

use crate::domain::result::QueryResult;
use crate::error::RunsqlError;

pub trait Connector {
    /// Execute a query and return its full tabular result.
    fn fetch(&self, query: &str) -> Result<QueryResult, RunsqlError>;

    fn engine_name(&self) -> &str;
}
