use crate::sample::Sample;
use crate::sample::Stored;

/// Storage operations behind the importer, the trainer, and the API.
/// Rows are appended and read; never updated or deleted.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    /// Creates the table and its indices if absent.
    async fn migrate(&self) -> anyhow::Result<()>;
    /// Number of stored rows.
    async fn count(&self) -> anyhow::Result<i64>;
    /// All stored rows in insertion order.
    async fn fetch(&self) -> anyhow::Result<Vec<Stored>>;
    /// Appends all samples atomically, returning how many were written.
    async fn append(&self, samples: &[Sample]) -> anyhow::Result<u64>;
}
