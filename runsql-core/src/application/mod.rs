// runsql-core/src/application/mod.rs

pub mod export;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do `use runsql_core::application::run_export;` without
// knowing the internal file layout.
pub use export::{ExportReport, run_export};
