use super::*;
use crate::COLUMNS;
use crate::N_FEATURES;
use crate::sample::Sample;
use crate::sample::Species;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Cells read as missing, in addition to the empty string.
const MISSING: [&str; 8] = ["NA", "N/A", "NaN", "nan", "null", "NULL", "None", "-NaN"];
/// How many distinct unmapped labels an error reports.
const UNMAPPED_SAMPLE: usize = 10;

fn missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || MISSING.contains(&cell)
}

impl Dataset {
    pub fn from_csv(path: &Path, map: &ColumnMap) -> Result<Self, ImportError> {
        if !path.exists() {
            return Err(ImportError::MissingFile(path.to_path_buf()));
        }
        log::info!("reading {}", path.display());
        let file = std::fs::File::open(path).map_err(|e| ImportError::Csv(e.into()))?;
        Self::from_reader(file, map)
    }

    /// Renames headers, checks required columns, maps labels, drops
    /// incomplete rows and coerces numbers. Fails before producing any
    /// sample if a column is missing, a label is unmapped, or a number is invalid.
    pub fn from_reader<R: Read>(reader: R, map: &ColumnMap) -> Result<Self, ImportError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = reader
            .headers()?
            .iter()
            .map(|h| map.rename(h))
            .collect::<Vec<String>>();
        let positions = COLUMNS.map(|c| headers.iter().position(|h| h == c));
        let missing_columns = COLUMNS
            .iter()
            .zip(positions.iter())
            .filter(|(_, position)| position.is_none())
            .map(|(c, _)| c.to_string())
            .collect::<Vec<String>>();
        if !missing_columns.is_empty() {
            return Err(ImportError::MissingColumns {
                missing: missing_columns,
                found: headers,
            });
        }
        let positions = positions.map(Option::unwrap_or_default);

        let mut samples = Vec::new();
        let mut dropped = 0usize;
        let mut unmapped = BTreeMap::<String, usize>::new();
        let mut record = csv::StringRecord::new();
        while reader.read_record(&mut record)? {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let cells = positions.map(|i| record.get(i).unwrap_or_default());
            if cells.iter().any(|c| missing(c)) {
                dropped += 1;
                continue;
            }
            let species = match Species::try_from(cells[N_FEATURES]) {
                Ok(species) => species,
                Err(_) => {
                    *unmapped.entry(Species::normalize(cells[N_FEATURES])).or_default() += 1;
                    continue;
                }
            };
            let mut features = [0.; N_FEATURES];
            for (i, cell) in cells[..N_FEATURES].iter().enumerate() {
                features[i] = cell
                    .trim()
                    .parse()
                    .map_err(|_| ImportError::InvalidNumber {
                        line,
                        column: COLUMNS[i].to_string(),
                        value: cell.to_string(),
                    })?;
            }
            let sample = Sample::new(features, species).map_err(|_| {
                let i = features.iter().position(|x| !x.is_finite()).unwrap_or(0);
                ImportError::InvalidNumber {
                    line,
                    column: COLUMNS[i].to_string(),
                    value: cells[i].to_string(),
                }
            })?;
            samples.push(sample);
        }

        if !unmapped.is_empty() {
            let rows = unmapped.values().sum();
            let mut sample = unmapped.into_iter().collect::<Vec<_>>();
            sample.sort_by(|(a, x), (b, y)| y.cmp(x).then(a.cmp(b)));
            sample.truncate(UNMAPPED_SAMPLE);
            return Err(ImportError::UnmappedLabels { rows, sample });
        }
        if dropped > 0 {
            log::warn!("dropped {} rows with missing values", dropped);
        }
        log::debug!("parsed {} rows", samples.len());
        Ok(Self::from(samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKLEARN: &str = "\
sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target
5.1,3.5,1.4,0.2,0
7.0,3.2,4.7,1.4,1
6.3,3.3,6.0,2.5,2
";

    const KAGGLE: &str = "\
Id,SepalLengthCm,SepalWidthCm,PetalLengthCm,PetalWidthCm,Species
1,5.1,3.5,1.4,0.2,Iris-setosa
2,7.0,3.2,4.7,1.4,Iris-versicolor
3,6.3,3.3,6.0,2.5, iris-Virginica
";

    #[test]
    fn sklearn_layout_loads() {
        let data = Dataset::from_reader(SKLEARN.as_bytes(), &ColumnMap::generic()).unwrap();
        assert!(data.len() == 3);
        assert!(data.labels() == vec![0, 1, 2]);
        assert!(data.column(0) == vec![5.1, 7.0, 6.3]);
    }

    #[test]
    fn kaggle_layout_loads() {
        let data = Dataset::from_reader(KAGGLE.as_bytes(), &ColumnMap::kaggle()).unwrap();
        assert!(data.len() == 3);
        assert!(data.labels() == vec![0, 1, 2]);
        assert!(data.column(4) == vec![0., 1., 2.]);
    }

    #[test]
    fn missing_columns_are_listed() {
        match Dataset::from_reader(KAGGLE.as_bytes(), &ColumnMap::generic()) {
            Err(ImportError::MissingColumns { missing, found }) => {
                assert!(missing.len() == 5);
                assert!(found.contains(&"SepalLengthCm".to_string()));
            }
            other => panic!("expected missing columns, got {:?}", other),
        }
    }

    #[test]
    fn incomplete_rows_are_dropped() {
        let csv = "\
sepal_length,sepal_width,petal_length,petal_width,target
5.1,3.5,1.4,0.2,0
,3.2,4.7,1.4,1
6.3,NA,6.0,2.5,2
6.4,3.2,4.5,1.5,
5.9,3.0,5.1,1.8,2
";
        let data = Dataset::from_reader(csv.as_bytes(), &ColumnMap::generic()).unwrap();
        assert!(data.len() == 2);
        assert!(data.labels() == vec![0, 2]);
    }

    #[test]
    fn short_rows_are_dropped() {
        let csv = "\
sepal_length,sepal_width,petal_length,petal_width,target
5.1,3.5,1.4,0.2,0
6.3,3.3,6.0
";
        let data = Dataset::from_reader(csv.as_bytes(), &ColumnMap::generic()).unwrap();
        assert!(data.len() == 1);
        assert!(data.labels() == vec![0]);
    }

    #[test]
    fn float_coded_targets_map() {
        let csv = "\
sepal_length,sepal_width,petal_length,petal_width,target
5.1,3.5,1.4,0.2,0.0
7.0,3.2,4.7,1.4,1.0
6.3,3.3,6.0,2.5,2.0
";
        let data = Dataset::from_reader(csv.as_bytes(), &ColumnMap::generic()).unwrap();
        assert!(data.labels() == vec![0, 1, 2]);
    }

    #[test]
    fn unmapped_labels_are_sampled() {
        let csv = "\
sepal_length,sepal_width,petal_length,petal_width,target
5.1,3.5,1.4,0.2,Iris-setosa
5.1,3.5,1.4,0.2,Iris-sibirica
5.1,3.5,1.4,0.2,sibirica
5.1,3.5,1.4,0.2,7
";
        match Dataset::from_reader(csv.as_bytes(), &ColumnMap::generic()) {
            Err(ImportError::UnmappedLabels { rows, sample }) => {
                assert!(rows == 3);
                assert!(sample[0] == ("sibirica".to_string(), 2));
                assert!(sample[1] == ("7".to_string(), 1));
            }
            other => panic!("expected unmapped labels, got {:?}", other),
        }
    }

    #[test]
    fn invalid_numbers_abort() {
        let csv = "\
sepal_length,sepal_width,petal_length,petal_width,target
5.1,3.5,wide,0.2,0
";
        match Dataset::from_reader(csv.as_bytes(), &ColumnMap::generic()) {
            Err(ImportError::InvalidNumber { line, column, .. }) => {
                assert!(line == 2);
                assert!(column == "petal_length");
            }
            other => panic!("expected invalid number, got {:?}", other),
        }
    }

    #[test]
    fn infinite_numbers_abort() {
        let csv = "\
sepal_length,sepal_width,petal_length,petal_width,target
5.1,inf,1.4,0.2,0
";
        match Dataset::from_reader(csv.as_bytes(), &ColumnMap::generic()) {
            Err(ImportError::InvalidNumber { column, .. }) => assert!(column == "sepal_width"),
            other => panic!("expected invalid number, got {:?}", other),
        }
    }

    #[test]
    fn absent_file_is_reported() {
        let path = Path::new("definitely/not/here.csv");
        match Dataset::from_csv(path, &ColumnMap::generic()) {
            Err(ImportError::MissingFile(p)) => assert!(p == path),
            other => panic!("expected missing file, got {:?}", other),
        }
    }
}
