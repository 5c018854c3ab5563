use super::Species;
use crate::Feature;
use crate::N_FEATURES;

/// Four measurements in column order plus the class.
/// Every feature is finite; construction enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    features: [Feature; N_FEATURES],
    species: Species,
}

impl Sample {
    pub fn new(features: [Feature; N_FEATURES], species: Species) -> anyhow::Result<Self> {
        match features.iter().position(|x| !x.is_finite()) {
            Some(i) => Err(anyhow::anyhow!(
                "non-finite {}: {}",
                crate::FEATURES[i],
                features[i]
            )),
            None => Ok(Self { features, species }),
        }
    }
    pub fn features(&self) -> &[Feature; N_FEATURES] {
        &self.features
    }
    pub fn species(&self) -> Species {
        self.species
    }
    pub fn label(&self) -> i32 {
        i32::from(self.species)
    }
}

/// A sample as persisted, with its surrogate key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stored {
    pub id: i64,
    pub sample: Sample,
}
