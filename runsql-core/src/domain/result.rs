// runsql-core/src/domain/result.rs

/// Tabular result of a query execution.
///
/// Columns are kept in projection order; each row is a vector of nullable
/// string cells (a `None` cell is SQL NULL). The engine-specific value types
/// are flattened to strings by the adapter, so this struct stays independent
/// of the database crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// Column names in result order.
    pub columns: Vec<String>,
    /// Row data, one vector of cells per row.
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
