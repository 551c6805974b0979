// runsql-core/src/infrastructure/adapters/mod.rs

pub mod sqlite;

pub use sqlite::SqliteConnector;
