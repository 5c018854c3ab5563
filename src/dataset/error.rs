use std::path::PathBuf;

/// Fatal conditions while turning a CSV into samples or storing them.
/// None of these are retried; the operator fixes the input and reruns.
#[derive(Debug)]
pub enum ImportError {
    MissingFile(PathBuf),
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },
    UnmappedLabels {
        rows: usize,
        sample: Vec<(String, usize)>,
    },
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
    Csv(csv::Error),
    Storage(anyhow::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile(path) => write!(f, "CSV not found: {}", path.display()),
            Self::MissingColumns { missing, found } => write!(
                f,
                "CSV is missing required columns after mapping: {:?}; CSV columns are: {:?}; \
                 add a column mapping (--map from=to) for your headers",
                missing, found
            ),
            Self::UnmappedLabels { rows, sample } => write!(
                f,
                "label mapping failed for {} rows; examples (normalized): {{{}}}",
                rows,
                sample
                    .iter()
                    .map(|(label, n)| format!("{:?}: {}", label, n))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::InvalidNumber {
                line,
                column,
                value,
            } => write!(f, "invalid number {:?} in column {} at line {}", value, column, line),
            Self::Csv(e) => write!(f, "malformed CSV: {}", e),
            Self::Storage(e) => write!(f, "storage failure: {:#}", e),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<anyhow::Error> for ImportError {
    fn from(e: anyhow::Error) -> Self {
        Self::Storage(e)
    }
}
