//! Training Binary
//!
//! Fits the scaler and classifier, logs held-out accuracy,
//! and writes the artifact the API serves.
//!
//! Options: --source csv|db, --csv, --out

use clap::Parser;
use irisdash::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    brb();
    model::Trainer::parse().run().await?;
    Ok(())
}
