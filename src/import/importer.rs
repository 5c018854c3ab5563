use super::ImportError;
use crate::dataset::ColumnMap;
use crate::dataset::Dataset;
use crate::store::Repository;
use std::path::PathBuf;

/// What an import run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Skipped { existing: i64 },
    Imported { rows: u64 },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped { existing } => {
                write!(f, "table already has {} rows; skipping import", existing)
            }
            Self::Imported { rows } => write!(f, "imported {} rows", rows),
        }
    }
}

/// A CSV source and how to read its headers.
#[derive(Debug, Clone)]
pub struct Importer {
    path: PathBuf,
    map: ColumnMap,
}

impl Importer {
    pub fn new(path: impl Into<PathBuf>, map: ColumnMap) -> Self {
        Self {
            path: path.into(),
            map,
        }
    }

    /// Parse and validate the file, then append it unless rows already exist.
    pub async fn run(&self, repository: &dyn Repository) -> Result<Outcome, ImportError> {
        log::info!("importing {}", self.path.display());
        let dataset = Dataset::from_csv(&self.path, &self.map)?;
        repository.migrate().await?;
        let existing = repository.count().await?;
        let outcome = match existing {
            0 => Outcome::Imported {
                rows: repository.append(dataset.samples()).await?,
            },
            existing => Outcome::Skipped { existing },
        };
        log::info!("{}", outcome);
        Ok(outcome)
    }
}
