// runsql-core/src/infrastructure/mod.rs

pub mod adapters;
pub mod csv_writer;
pub mod error;
pub mod fs;
pub mod sql_source;
