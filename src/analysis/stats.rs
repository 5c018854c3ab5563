use crate::Feature;

/// Summary of one column. Serializes as `{stat: value}` with the
/// quartiles keyed `25%`, `50%`, `75%`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stats {
    pub count: Feature,
    pub mean: Feature,
    /// Undefined below two values.
    pub std: Option<Feature>,
    pub min: Feature,
    #[serde(rename = "25%")]
    pub q25: Feature,
    #[serde(rename = "50%")]
    pub q50: Feature,
    #[serde(rename = "75%")]
    pub q75: Feature,
    pub max: Feature,
}

impl Stats {
    /// Statistic names and values in display order.
    pub fn rows(&self) -> [(&'static str, Option<Feature>); 8] {
        [
            ("count", Some(self.count)),
            ("mean", Some(self.mean)),
            ("std", self.std),
            ("min", Some(self.min)),
            ("25%", Some(self.q25)),
            ("50%", Some(self.q50)),
            ("75%", Some(self.q75)),
            ("max", Some(self.max)),
        ]
    }
}

impl TryFrom<&[Feature]> for Stats {
    type Error = super::EmptyDataset;
    fn try_from(values: &[Feature]) -> Result<Self, Self::Error> {
        if values.is_empty() {
            return Err(super::EmptyDataset);
        }
        let n = values.len() as Feature;
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let mean = values.iter().sum::<Feature>() / n;
        let std = match values.len() {
            1 => None,
            _ => Some(
                (values.iter().map(|x| (x - mean).powi(2)).sum::<Feature>() / (n - 1.)).sqrt(),
            ),
        };
        Ok(Self {
            count: n,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            q50: quantile(&sorted, 0.50),
            q75: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Linear interpolation between closest ranks of an ascending slice.
pub fn quantile(sorted: &[Feature], q: Feature) -> Feature {
    let position = q * (sorted.len() - 1) as Feature;
    let lo = position.floor() as usize;
    let hi = position.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (position - lo as Feature)
}
