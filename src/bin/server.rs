//! HTTP API Binary
//!
//! Serves /health, /analyze, /db-info and /predict.
//! Reads DB_URL, BIND_ADDR and MODEL_PATH from the environment.

use irisdash::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    server::Server::run().await
}
