use super::Artifact;
use super::Pipeline;
use crate::SPLIT_SEED;
use crate::SPLIT_TEST_FRACTION;
use crate::dataset::ColumnMap;
use crate::dataset::Dataset;
use std::path::PathBuf;

/// Where training samples come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Source {
    /// The CSV file, read with the generic column preset.
    Csv,
    /// The `iris` table (needs `DB_URL`).
    Db,
}

/// Fit the pipeline on a stratified split, report held-out accuracy,
/// and write the artifact.
#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Trainer {
    #[arg(long, value_enum, default_value_t = Source::Csv)]
    source: Source,
    #[arg(long, default_value = crate::DEFAULT_CSV_PATH)]
    csv: PathBuf,
    #[arg(long, env = "MODEL_PATH", default_value = crate::DEFAULT_MODEL_PATH)]
    out: PathBuf,
}

impl Trainer {
    async fn dataset(&self) -> anyhow::Result<Dataset> {
        match self.source {
            Source::Csv => Ok(Dataset::from_csv(&self.csv, &ColumnMap::generic())?),
            Source::Db => Dataset::hydrate(crate::store::db().await?.as_ref()).await,
        }
    }

    pub async fn run(&self) -> anyhow::Result<Pipeline> {
        let dataset = self.dataset().await?;
        let (train, test) = dataset.split(SPLIT_TEST_FRACTION, SPLIT_SEED);
        log::info!("training on {} samples, holding out {}", train.len(), test.len());
        let pipeline = Pipeline::fit(&train)?;
        log::info!("held-out accuracy {:.4}", pipeline.accuracy(&test));
        if crate::interrupted() {
            anyhow::bail!("interrupted, {} left unchanged", self.out.display());
        }
        pipeline.save(&self.out)?;
        log::info!("saved pipeline to {}", self.out.display());
        Ok(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_read_the_bundled_csv() {
        let trainer = Trainer::try_parse_from(["trainer"]).unwrap();
        assert!(trainer.source == Source::Csv);
        assert!(trainer.csv == PathBuf::from(crate::DEFAULT_CSV_PATH));
    }

    #[tokio::test]
    async fn writes_a_loadable_artifact() {
        let dir = std::env::temp_dir().join(format!("irisdash-trainer-{}", std::process::id()));
        let out = dir.join("model.bin");
        let csv = concat!(env!("CARGO_MANIFEST_DIR"), "/sample_data/iris.csv");
        let trainer = Trainer::try_parse_from([
            "trainer",
            "--csv",
            csv,
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let pipeline = trainer.run().await.unwrap();
        assert!(Pipeline::load(&out).unwrap() == pipeline);
        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn missing_csv_fails() {
        let trainer = Trainer::try_parse_from(["trainer", "--csv", "no/such.csv"]).unwrap();
        assert!(trainer.run().await.is_err());
    }
}
