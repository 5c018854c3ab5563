use crate::Feature;
use crate::N_FEATURES;
use ndarray::Array2;
use ndarray::Axis;

/// Standardized values are clamped to this magnitude so that huge but
/// finite inputs stay finite through the classifier.
pub const STANDARD_LIMIT: Feature = 1e6;

/// Centers each feature on its training mean and divides by its
/// population standard deviation. Constant features keep scale 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardScaler {
    means: [Feature; N_FEATURES],
    scales: [Feature; N_FEATURES],
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self {
            means: [0.; N_FEATURES],
            scales: [1.; N_FEATURES],
        }
    }
}

impl StandardScaler {
    pub fn new(means: [Feature; N_FEATURES], scales: [Feature; N_FEATURES]) -> Self {
        Self { means, scales }
    }
    pub fn means(&self) -> &[Feature; N_FEATURES] {
        &self.means
    }
    pub fn scales(&self) -> &[Feature; N_FEATURES] {
        &self.scales
    }

    pub fn fit(rows: &[[Feature; N_FEATURES]]) -> Self {
        let x = Array2::from(rows.to_vec());
        let Some(mean) = x.mean_axis(Axis(0)) else {
            return Self::default();
        };
        let spread = x.std_axis(Axis(0), 0.);
        Self {
            means: std::array::from_fn(|j| mean[j]),
            scales: std::array::from_fn(|j| match spread[j] {
                s if s > 0. => s,
                _ => 1.,
            }),
        }
    }

    pub fn transform(&self, x: &[Feature; N_FEATURES]) -> [Feature; N_FEATURES] {
        std::array::from_fn(|j| {
            ((x[j] - self.means[j]) / self.scales[j]).clamp(-STANDARD_LIMIT, STANDARD_LIMIT)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardized_columns_have_unit_spread() {
        let rows = [[1., 2., 5., 0.], [3., 4., 5., 1.], [5., 6., 5., 2.]];
        let scaler = StandardScaler::fit(&rows);
        let scaled = rows.iter().map(|x| scaler.transform(x)).collect::<Vec<_>>();
        for j in [0, 1, 3] {
            let mean = scaled.iter().map(|x| x[j]).sum::<f64>() / 3.;
            let var = scaled.iter().map(|x| x[j] * x[j]).sum::<f64>() / 3.;
            assert!(mean.abs() < 1e-12);
            assert!((var - 1.).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_feature_keeps_unit_scale() {
        let rows = [[1., 2., 5., 0.], [3., 4., 5., 1.]];
        let scaler = StandardScaler::fit(&rows);
        assert!(scaler.scales()[2] == 1.);
        assert!(scaler.transform(&rows[0])[2] == 0.);
    }

    #[test]
    fn empty_rows_give_identity() {
        assert!(StandardScaler::fit(&[]) == StandardScaler::default());
    }

    #[test]
    fn extreme_values_stay_finite() {
        let scaler = StandardScaler::new([5.8, 3.1, 3.8, 1.2], [0.8, 0.4, 1.8, 0.8]);
        for x in [1e308, -1e308, f64::MAX, f64::MIN] {
            let z = scaler.transform(&[x, x, x, x]);
            assert!(z.iter().all(|z| z.is_finite()));
            assert!(z.iter().all(|z| z.abs() == STANDARD_LIMIT));
        }
    }
}
