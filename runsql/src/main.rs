// runsql/src/main.rs

use clap::Parser;
use tracing::debug;

// Infrastructure (Adapters)
use runsql_core::infrastructure::adapters::sqlite::SqliteConnector;

// Domain
use runsql_core::domain::DomainError;
use runsql_core::domain::paths::{DEFAULT_SQL_PATH, PathConfig};

// Application (Use Case)
use runsql_core::RunsqlError;
use runsql_core::application::run_export;

#[derive(Parser)]
#[command(name = "runsql")]
#[command(about = "Executes a SQL statement and stores the results in a CSV file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the SQLite database file (default: db/fashion_magazines.db)
    #[arg(value_name = "path_to_db")]
    db: Option<String>,

    /// Path to the file containing the SQL query (default: sql/fashion_magazines.sql)
    #[arg(value_name = "path_to_sql")]
    sql: Option<String>,

    /// Path to the CSV file that will be created with the results
    /// (default: data/fashion_magazines.csv)
    #[arg(value_name = "path_to_csv")]
    csv: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Setup Logging (Tracing)
    // RUST_LOG=debug runsql ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let paths = PathConfig::resolve(cli.db, cli.sql, cli.csv);
    debug!(db = %paths.db, sql = %paths.sql, csv = %paths.csv, "Resolved paths");

    // Open the connection before anything else; the failure message is the
    // friendly one, the underlying cause goes to the log.
    let connector = match SqliteConnector::open(&paths.db) {
        Ok(connector) => connector,
        Err(e) => {
            tracing::error!("Connection failed: {}", e);
            eprintln!("Error: Could not connect to the database.");
            std::process::exit(1);
        }
    };

    match run_export(&connector, &paths.sql, &paths.csv) {
        Ok(report) => {
            println!(
                "✨ Wrote {} rows to {}",
                report.rows_exported, report.destination
            );
            Ok(())
        }
        Err(RunsqlError::Domain(DomainError::PlaceholderSql)) => {
            eprintln!(
                "Error: Add your SQL to the {} file before running.",
                DEFAULT_SQL_PATH
            );
            std::process::exit(1);
        }
        Err(RunsqlError::Domain(DomainError::EmptyResult)) => {
            eprintln!("Error: Query did not return any results");
            std::process::exit(1);
        }
        // Everything else (missing SQL file, write failure, engine error)
        // surfaces as the raw error chain.
        Err(e) => Err(e.into()),
    }
}
