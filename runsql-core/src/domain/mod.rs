// runsql-core/src/domain/mod.rs

pub mod error;
pub mod guard;
pub mod paths;
pub mod result;

pub use error::DomainError;
pub use paths::PathConfig;
pub use result::QueryResult;
