use super::LogisticRegression;
use super::StandardScaler;
use crate::Feature;
use crate::N_CLASSES;
use crate::N_FEATURES;
use crate::Probability;
use crate::dataset::Dataset;
use crate::sample::Species;

/// The trained unit: standardize, then classify.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pipeline {
    scaler: StandardScaler,
    classifier: LogisticRegression,
}

impl Pipeline {
    pub fn new(scaler: StandardScaler, classifier: LogisticRegression) -> Self {
        Self { scaler, classifier }
    }
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }
    pub fn classifier(&self) -> &LogisticRegression {
        &self.classifier
    }

    pub fn fit(dataset: &Dataset) -> anyhow::Result<Self> {
        if dataset.is_empty() {
            anyhow::bail!("cannot train on an empty dataset");
        }
        log::info!("fitting pipeline on {} samples", dataset.len());
        let rows = dataset.features();
        let scaler = StandardScaler::fit(&rows);
        let scaled = rows.iter().map(|x| scaler.transform(x)).collect::<Vec<_>>();
        let classifier = LogisticRegression::fit(&scaled, &dataset.labels())?;
        Ok(Self { scaler, classifier })
    }

    pub fn predict_proba(&self, x: &[Feature; N_FEATURES]) -> [Probability; N_CLASSES] {
        self.classifier.predict_proba(&self.scaler.transform(x))
    }

    /// Most probable class; ties go to the lower index.
    pub fn predict(&self, x: &[Feature; N_FEATURES]) -> Species {
        Species::all()[argmax(&self.predict_proba(x))]
    }

    /// Fraction of samples whose class is predicted correctly.
    pub fn accuracy(&self, dataset: &Dataset) -> Probability {
        match dataset.len() {
            0 => 0.,
            n => {
                dataset
                    .iter()
                    .filter(|s| self.predict(s.features()) == s.species())
                    .count() as Probability
                    / n as Probability
            }
        }
    }
}

/// Index of the largest value, first one on ties.
pub fn argmax(p: &[Probability]) -> usize {
    p.iter()
        .enumerate()
        .fold((0, Probability::NEG_INFINITY), |(i, best), (j, &x)| {
            if x > best { (j, x) } else { (i, best) }
        })
        .0
}
