//! The append-only `iris` table.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from `DB_URL`
//!
//! ## Access
//!
//! - [`Repository`] — Count, read, and append rows; implemented for
//!   `tokio_postgres::Client`
//! - [`Schema`] — Table metadata and DDL generation
mod repository;

#[cfg(test)]
mod memory;
#[cfg(feature = "database")]
mod postgres;
#[cfg(feature = "database")]
mod schema;

pub use repository::*;

#[cfg(test)]
pub use memory::*;
#[cfg(feature = "database")]
pub use postgres::*;
#[cfg(feature = "database")]
pub use schema::*;

/// Table of imported samples.
#[rustfmt::skip]
pub const IRIS: &str = "iris";
