//! Samples and class labels.
mod sample;
mod species;

pub use sample::*;
pub use species::*;
