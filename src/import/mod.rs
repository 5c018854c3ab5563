//! One-shot CSV import into the `iris` table.
//!
//! The whole file is parsed and validated before the table is touched,
//! then written with a single `COPY`. A table that already has rows is
//! left alone, so rerunning the import is a no-op.
mod importer;
#[cfg(all(feature = "database", feature = "cli"))]
mod args;

pub use crate::dataset::ImportError;
pub use importer::*;
#[cfg(all(feature = "database", feature = "cli"))]
pub use args::*;
