//! Import Binary
//!
//! Loads a CSV into the iris table once; a populated table is left alone.
//!
//! Options: --path, --preset generic|kaggle, --map FROM=TO

use clap::Parser;
use irisdash::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    import::Args::parse().run().await?;
    Ok(())
}
