use crate::Feature;
use crate::N_FEATURES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub sepal_length: Feature,
    pub sepal_width: Feature,
    pub petal_length: Feature,
    pub petal_width: Feature,
}

impl From<PredictRequest> for [Feature; N_FEATURES] {
    fn from(req: PredictRequest) -> Self {
        [
            req.sepal_length,
            req.sepal_width,
            req.petal_length,
            req.petal_width,
        ]
    }
}

impl From<[Feature; N_FEATURES]> for PredictRequest {
    fn from([sepal_length, sepal_width, petal_length, petal_width]: [Feature; N_FEATURES]) -> Self {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_required() {
        let partial = r#"{"sepal_length": 5.1, "sepal_width": 3.5, "petal_length": 1.4}"#;
        assert!(serde_json::from_str::<PredictRequest>(partial).is_err());
        let strings = r#"{"sepal_length": "a", "sepal_width": 3.5, "petal_length": 1.4, "petal_width": 0.2}"#;
        assert!(serde_json::from_str::<PredictRequest>(strings).is_err());
    }

    #[test]
    fn integers_coerce_to_floats() {
        let body = r#"{"sepal_length": 5, "sepal_width": 3, "petal_length": 1, "petal_width": 0}"#;
        let req = serde_json::from_str::<PredictRequest>(body).unwrap();
        assert!(<[f64; 4]>::from(req) == [5., 3., 1., 0.]);
    }
}
