use super::PredictError;
use super::Prediction;
use crate::Feature;
use crate::N_FEATURES;
use crate::model::Artifact;
use crate::model::ArtifactError;
use crate::model::Pipeline;
use std::path::PathBuf;

/// Serves predictions from whatever artifact is at `path` right now.
/// The file is read on every call, so retraining needs no restart.
#[derive(Debug, Clone)]
pub struct Predictor {
    path: PathBuf,
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(crate::model_path())
    }
}

impl Predictor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn predict(&self, features: [Feature; N_FEATURES]) -> Result<Prediction, PredictError> {
        let pipeline = self.pipeline()?;
        if let Some(i) = features.iter().position(|x| !x.is_finite()) {
            return Err(PredictError::Failed(format!(
                "{} must be finite, got {}",
                crate::FEATURES[i],
                features[i]
            )));
        }
        let probabilities = pipeline.predict_proba(&features);
        if probabilities.iter().any(|p| !p.is_finite()) {
            return Err(PredictError::Failed(format!(
                "non-finite probabilities for {:?}",
                features
            )));
        }
        let prediction = Prediction::from(probabilities);
        log::debug!("{:?} -> {}", features, prediction.class_name);
        Ok(prediction)
    }

    /// The artifact as it is on disk now. A file that is missing, including
    /// one removed between calls, means no model has been trained.
    fn pipeline(&self) -> Result<Pipeline, PredictError> {
        self.untrained(Pipeline::load(&self.path))
    }
    fn untrained(&self, loaded: Result<Pipeline, ArtifactError>) -> Result<Pipeline, PredictError> {
        match loaded {
            Err(ArtifactError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PredictError::NotTrained(self.path.clone()))
            }
            loaded => Ok(loaded?),
        }
    }
}
