//! Descriptive statistics over the stored samples.
//!
//! [`Describe`] summarizes every column of [`crate::COLUMNS`] with count,
//! mean, sample standard deviation, extrema, and linearly interpolated
//! quartiles.
mod describe;
mod stats;

pub use describe::*;
pub use stats::*;
