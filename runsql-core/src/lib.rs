// runsql-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Defines the contracts (Connector).
pub mod ports;

// 2. Domain (business core)
// Path resolution, tabular results, the SQL source guard.
// Depends on nothing else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Technical implementations (SQLite, SQL file loader, CSV writer).
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration of the export sequence.
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers import the main error easily: use runsql_core::RunsqlError;
pub use error::RunsqlError;
