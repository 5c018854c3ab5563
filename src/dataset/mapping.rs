use std::collections::BTreeMap;

/// Header renames applied before validation: CSV header → column name.
/// Headers without an entry keep their name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap(BTreeMap<String, String>);

impl ColumnMap {
    /// snake_case headers and the scikit-learn `"... (cm)"` spellings.
    pub fn generic() -> Self {
        Self::default()
            .with("sepal_length", "sepal_length")
            .with("sepal_width", "sepal_width")
            .with("petal_length", "petal_length")
            .with("petal_width", "petal_width")
            .with("target", "target")
            .with("sepal length (cm)", "sepal_length")
            .with("sepal width (cm)", "sepal_width")
            .with("petal length (cm)", "petal_length")
            .with("petal width (cm)", "petal_width")
    }
    /// The Kaggle `Iris.csv` headers.
    pub fn kaggle() -> Self {
        Self::default()
            .with("SepalLengthCm", "sepal_length")
            .with("SepalWidthCm", "sepal_width")
            .with("PetalLengthCm", "petal_length")
            .with("PetalWidthCm", "petal_width")
            .with("Species", "target")
    }
    pub fn with(mut self, from: &str, to: &str) -> Self {
        self.0.insert(from.to_string(), to.to_string());
        self
    }
    pub fn extend(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.0.extend(pairs);
        self
    }
    pub fn rename(&self, header: &str) -> String {
        self.0
            .get(header)
            .cloned()
            .unwrap_or_else(|| header.to_string())
    }
}

/// Parses one `from=to` override, as given on the command line.
pub fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((from, to)) if !from.is_empty() && !to.trim().is_empty() => {
            Ok((from.to_string(), to.trim().to_string()))
        }
        _ => Err(format!("expected FROM=TO, got {:?}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sklearn_headers_rename() {
        let map = ColumnMap::generic();
        assert!(map.rename("sepal length (cm)") == "sepal_length");
        assert!(map.rename("target") == "target");
        assert!(map.rename("Id") == "Id");
    }

    #[test]
    fn kaggle_headers_rename() {
        let map = ColumnMap::kaggle();
        assert!(map.rename("PetalWidthCm") == "petal_width");
        assert!(map.rename("Species") == "target");
        assert!(map.rename("sepal length (cm)") == "sepal length (cm)");
    }

    #[test]
    fn overrides_win() {
        let map = ColumnMap::kaggle().extend([("Species".to_string(), "kind".to_string())]);
        assert!(map.rename("Species") == "kind");
    }

    #[test]
    fn pairs_parse() {
        assert!(parse_pair("class=target") == Ok(("class".into(), "target".into())));
        assert!(parse_pair("a b=c") == Ok(("a b".into(), "c".into())));
        assert!(parse_pair("target").is_err());
        assert!(parse_pair("=target").is_err());
        assert!(parse_pair("class=").is_err());
    }
}
