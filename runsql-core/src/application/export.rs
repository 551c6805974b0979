// runsql-core/src/application/export.rs
//
// USE CASE: the whole export pipeline, as a gated linear sequence.
// Each step either hands its output to the next step or aborts the run:
// load SQL -> guard check -> execute -> empty check -> write CSV.

use std::time::Instant;
use tracing::{debug, error, instrument};

use crate::domain::error::DomainError;
use crate::domain::guard::check_sql_source;
use crate::error::RunsqlError;
use crate::infrastructure::csv_writer::write_csv;
use crate::infrastructure::sql_source::load_sql;
use crate::ports::connector::Connector;

/// The statement sent to the engine.
///
/// The SQL source file is read only to satisfy the guard check; its contents
/// are NOT executed. What runs is always this fixed literal, mirroring the
/// behavior of the script this tool replaces. Per customer, it sums
/// price_per_month * subscription_length over unpaid 'Fashion Magazine'
/// orders and formats the total as a dollar amount.
pub const AMOUNT_DUE_QUERY: &str = "\
SELECT
    c.customer_name AS Customer,
    printf('$%.2f', SUM(s.price_per_month * s.subscription_length)) AS \"Amount Due\"
FROM
    customers c
JOIN
    orders o ON c.customer_id = o.customer_id
JOIN
    subscriptions s ON o.subscription_id = s.subscription_id
WHERE
    o.order_status = 'unpaid'
    AND s.description = 'Fashion Magazine'
GROUP BY
    c.customer_name;";

/// Outcome of a successful run, for the CLI's closing message.
#[derive(Debug)]
pub struct ExportReport {
    pub rows_exported: usize,
    pub destination: String,
}

/// Run the export sequence against an already-open connection.
///
/// Friendly handling is reserved for the two user-relevant conditions
/// (unedited SQL source, empty result); everything else propagates as the
/// raw underlying error.
#[instrument(skip(connector), fields(engine = connector.engine_name()))]
pub fn run_export(
    connector: &dyn Connector,
    sql_path: &str,
    csv_path: &str,
) -> Result<ExportReport, RunsqlError> {
    let start = Instant::now();

    let sql = load_sql(sql_path)?;
    check_sql_source(&sql)?;

    debug!("Executing export query");
    let result = connector.fetch(AMOUNT_DUE_QUERY)?;
    let duration = start.elapsed();

    if result.is_empty() {
        error!("Query returned no rows after {:.2?}", duration);
        return Err(DomainError::EmptyResult.into());
    }

    write_csv(&result, csv_path)?;
    debug!(
        rows = result.row_count(),
        "Export finished in {:.2?}",
        duration
    );

    Ok(ExportReport {
        rows_exported: result.row_count(),
        destination: csv_path.to_string(),
    })
}
