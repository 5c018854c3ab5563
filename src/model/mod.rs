//! Standardization followed by multinomial logistic regression.
//!
//! ## Components
//!
//! - [`StandardScaler`] — Per-feature centering and scaling
//! - [`LogisticRegression`] — Softmax classifier fitted with linfa
//! - [`Pipeline`] — Scaler then classifier, the unit that is trained and served
//!
//! ## Persistence
//!
//! - [`Artifact`] — Big-endian binary file format for a fitted [`Pipeline`]
//! - [`ArtifactError`] — Why an artifact could not be read or written
//!
//! ## Training
//!
//! - `Trainer` — Split, fit, evaluate, save (features `database` + `cli`)
mod artifact;
mod logistic;
mod pipeline;
mod scaler;
#[cfg(all(feature = "database", feature = "cli"))]
mod trainer;

pub use artifact::*;
pub use logistic::*;
pub use pipeline::*;
pub use scaler::*;
#[cfg(all(feature = "database", feature = "cli"))]
pub use trainer::*;
