//! Prediction over the on-disk pipeline artifact.
mod error;
mod prediction;
mod predictor;

pub use error::*;
pub use prediction::*;
pub use predictor::*;
