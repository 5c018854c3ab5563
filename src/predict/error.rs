use std::path::PathBuf;

/// `NotTrained` is the caller's problem (run the trainer);
/// anything else is ours.
#[derive(Debug)]
pub enum PredictError {
    NotTrained(PathBuf),
    Failed(String),
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotTrained(path) => write!(
                f,
                "Model not found at {}. Run: cargo run --bin trainer",
                path.display()
            ),
            Self::Failed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for PredictError {}

impl From<crate::model::ArtifactError> for PredictError {
    fn from(e: crate::model::ArtifactError) -> Self {
        Self::Failed(e.to_string())
    }
}
