use crate::Feature;
use crate::N_FEATURES;
use crate::sample::Sample;
use crate::store::Repository;

/// Samples in load order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset(Vec<Sample>);

impl Dataset {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn samples(&self) -> &[Sample] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.0.iter()
    }
    /// Feature rows, in sample order.
    pub fn features(&self) -> Vec<[Feature; N_FEATURES]> {
        self.0.iter().map(|s| *s.features()).collect()
    }
    /// Class indices, in sample order.
    pub fn labels(&self) -> Vec<usize> {
        self.0.iter().map(|s| s.species().index()).collect()
    }
    /// Values of one column of [`crate::COLUMNS`]; the label column reads as its code.
    pub fn column(&self, index: usize) -> Vec<Feature> {
        self.0
            .iter()
            .map(|s| match index {
                i if i < N_FEATURES => s.features()[i],
                _ => s.label() as Feature,
            })
            .collect()
    }

    /// Every stored row, in insertion order.
    pub async fn hydrate(repository: &dyn Repository) -> anyhow::Result<Self> {
        let rows = repository.fetch().await?;
        log::debug!("hydrated {} rows", rows.len());
        Ok(Self(rows.into_iter().map(|row| row.sample).collect()))
    }
}

impl From<Vec<Sample>> for Dataset {
    fn from(samples: Vec<Sample>) -> Self {
        Self(samples)
    }
}

impl FromIterator<Sample> for Dataset {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Dataset {
    type Item = Sample;
    type IntoIter = std::vec::IntoIter<Sample>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
