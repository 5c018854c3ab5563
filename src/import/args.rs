use super::ImportError;
use super::Importer;
use super::Outcome;
use crate::dataset::ColumnMap;
use crate::dataset::parse_pair;
use std::path::PathBuf;

/// Header layouts the importer knows out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// snake_case or scikit-learn `sepal length (cm)` headers with a `target` column.
    Generic,
    /// `SepalLengthCm` ... `Species` headers from the Kaggle dump.
    Kaggle,
}

impl From<Preset> for ColumnMap {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Generic => ColumnMap::generic(),
            Preset::Kaggle => ColumnMap::kaggle(),
        }
    }
}

/// Load a CSV into the `iris` table once.
#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = crate::DEFAULT_CSV_PATH)]
    path: PathBuf,
    #[arg(long, value_enum, default_value_t = Preset::Generic)]
    preset: Preset,
    /// Extra header renames, e.g. `--map "Sepal.Length=sepal_length"`.
    #[arg(long = "map", value_parser = parse_pair)]
    map: Vec<(String, String)>,
}

impl Args {
    pub fn importer(&self) -> Importer {
        Importer::new(
            &self.path,
            ColumnMap::from(self.preset).extend(self.map.iter().cloned()),
        )
    }

    pub async fn run(&self) -> Result<Outcome, ImportError> {
        let client = crate::store::db().await?;
        self.importer().run(client.as_ref()).await
    }
}
