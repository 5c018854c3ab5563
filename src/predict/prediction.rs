use crate::N_CLASSES;
use crate::Probability;
use crate::model::argmax;
use crate::sample::Species;
use std::collections::BTreeMap;

/// The most probable class and the full distribution, keyed by class name.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Prediction {
    pub class_id: usize,
    pub class_name: String,
    pub probabilities: BTreeMap<String, Probability>,
}

impl From<[Probability; N_CLASSES]> for Prediction {
    fn from(probabilities: [Probability; N_CLASSES]) -> Self {
        let species = Species::all()[argmax(&probabilities)];
        Self {
            class_id: species.index(),
            class_name: species.name().to_string(),
            probabilities: Species::all()
                .iter()
                .map(|s| (s.name().to_string(), probabilities[s.index()]))
                .collect(),
        }
    }
}
