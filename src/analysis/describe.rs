use super::Stats;
use crate::COLUMNS;
use crate::dataset::Dataset;
use std::collections::BTreeMap;

/// There is nothing to describe until the table has been imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDataset;

impl std::fmt::Display for EmptyDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no rows in table; run the import first")
    }
}

impl std::error::Error for EmptyDataset {}

/// Row and column counts plus per-column [`Stats`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Describe {
    pub rows: usize,
    pub columns: usize,
    pub describe: BTreeMap<String, Stats>,
}

impl TryFrom<&Dataset> for Describe {
    type Error = EmptyDataset;
    fn try_from(dataset: &Dataset) -> Result<Self, Self::Error> {
        if dataset.is_empty() {
            return Err(EmptyDataset);
        }
        let describe = COLUMNS
            .iter()
            .enumerate()
            .map(|(i, name)| Ok((name.to_string(), Stats::try_from(&dataset.column(i)[..])?)))
            .collect::<Result<BTreeMap<_, _>, EmptyDataset>>()?;
        Ok(Self {
            rows: dataset.len(),
            columns: COLUMNS.len(),
            describe,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ColumnMap;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn empty_is_an_error() {
        assert!(Describe::try_from(&Dataset::default()) == Err(EmptyDataset));
    }

    #[test]
    fn describes_iris() {
        let csv = include_str!("../../sample_data/iris.csv");
        let dataset = Dataset::from_reader(csv.as_bytes(), &ColumnMap::generic()).unwrap();
        let describe = Describe::try_from(&dataset).unwrap();
        assert!(describe.rows == 150);
        assert!(describe.columns == 5);
        assert!(describe.describe.len() == 5);
        let sepal = describe.describe["sepal_length"];
        assert!(sepal.count == 150.);
        assert!(close(sepal.mean, 5.843333));
        assert!(close(sepal.std.unwrap(), 0.828066));
        assert!(close(sepal.q25, 5.1));
        assert!(close(sepal.q50, 5.8));
        assert!(close(sepal.q75, 6.4));
        let target = describe.describe["target"];
        assert!(close(target.mean, 1.));
        assert!(target.min == 0. && target.max == 2.);
    }
}
