//! In-memory tabular data.
//!
//! A [`Dataset`] is an ordered collection of validated [`Sample`]s,
//! loaded either from a CSV file through a [`ColumnMap`] or from the
//! `iris` table through a [`Repository`](crate::store::Repository).
mod dataset;
mod error;
mod mapping;
mod reader;
mod split;

pub use dataset::*;
pub use error::*;
pub use mapping::*;
