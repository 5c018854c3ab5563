use crate::Feature;
use crate::LOGISTIC_C;
use crate::LOGISTIC_MAX_ITERATIONS;
use crate::LOGISTIC_TOLERANCE;
use crate::N_CLASSES;
use crate::N_FEATURES;
use crate::Probability;
use linfa::prelude::*;
use linfa_logistic::MultiLogisticRegression;
use ndarray::Array1;
use ndarray::Array2;

/// Multinomial (softmax) logistic regression over standardized features.
///
/// Fitted with linfa's L-BFGS solver on `Σloss + α·||W||²/2` with
/// `α = 1/C`. Intercepts are not penalized. Only the fitted coefficients
/// are kept, so inference and persistence need nothing from linfa.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LogisticRegression {
    weights: [[Feature; N_FEATURES]; N_CLASSES],
    biases: [Feature; N_CLASSES],
}

impl LogisticRegression {
    pub fn new(weights: [[Feature; N_FEATURES]; N_CLASSES], biases: [Feature; N_CLASSES]) -> Self {
        Self { weights, biases }
    }
    pub fn weights(&self) -> &[[Feature; N_FEATURES]; N_CLASSES] {
        &self.weights
    }
    pub fn biases(&self) -> &[Feature; N_CLASSES] {
        &self.biases
    }

    pub fn logits(&self, x: &[Feature; N_FEATURES]) -> [Feature; N_CLASSES] {
        std::array::from_fn(|k| {
            self.weights[k]
                .iter()
                .zip(x.iter())
                .map(|(w, x)| w * x)
                .sum::<Feature>()
                + self.biases[k]
        })
    }

    pub fn predict_proba(&self, x: &[Feature; N_FEATURES]) -> [Probability; N_CLASSES] {
        softmax(self.logits(x))
    }

    /// Fits on `rows` with class indices `labels`. A class that never
    /// appears in `labels` keeps zero coefficients.
    pub fn fit(rows: &[[Feature; N_FEATURES]], labels: &[usize]) -> anyhow::Result<Self> {
        if rows.len() != labels.len() {
            anyhow::bail!("{} rows but {} labels", rows.len(), labels.len());
        }
        if rows.is_empty() {
            anyhow::bail!("cannot fit on zero rows");
        }
        if let Some(&y) = labels.iter().find(|&&y| y >= N_CLASSES) {
            anyhow::bail!("class index {} out of range", y);
        }
        let x = Array2::from(rows.to_vec());
        let y = Array1::from(labels.to_vec());
        let fitted = MultiLogisticRegression::default()
            .alpha(1. / LOGISTIC_C)
            .max_iterations(LOGISTIC_MAX_ITERATIONS)
            .gradient_tolerance(LOGISTIC_TOLERANCE)
            .fit(&Dataset::new(x, y))
            .map_err(|e| anyhow::anyhow!("logistic regression did not fit: {}", e))?;
        let params = fitted.params();
        let intercept = fitted.intercept();
        let mut model = Self::default();
        for (column, &k) in fitted.classes().iter().enumerate() {
            model.biases[k] = intercept[column];
            for j in 0..N_FEATURES {
                model.weights[k][j] = params[[j, column]];
            }
        }
        log::debug!("fitted {} classes on {} rows", fitted.classes().len(), rows.len());
        Ok(model)
    }
}

/// Numerically stable softmax; subtracts the max logit before exponentiating.
pub fn softmax<const N: usize>(logits: [Feature; N]) -> [Probability; N] {
    let max = logits.iter().copied().fold(Feature::NEG_INFINITY, Feature::max);
    let exps = logits.map(|l| (l - max).exp());
    let total = exps.iter().sum::<Feature>();
    exps.map(|e| e / total)
}
