//! Dashboard Binary
//!
//! Interactive terminal client for the HTTP API.
//!
//! Options: --api (or API_BASE)

use clap::Parser;
use irisdash::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    dashboard::Args::parse().run().await
}
