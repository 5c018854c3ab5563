use super::*;
use crate::sample::Sample;
use crate::sample::Stored;
use std::sync::Mutex;

/// Vec-backed repository for exercising handlers and the importer
/// without a database. `failing` makes every call error.
#[derive(Default)]
pub struct Memory {
    rows: Mutex<Vec<Stored>>,
    failing: bool,
}

impl Memory {
    pub fn failing() -> Self {
        Self {
            rows: Mutex::default(),
            failing: true,
        }
    }
    fn check(&self) -> anyhow::Result<()> {
        match self.failing {
            true => Err(anyhow::anyhow!("connection refused")),
            false => Ok(()),
        }
    }
}

impl From<Vec<Sample>> for Memory {
    fn from(samples: Vec<Sample>) -> Self {
        let memory = Self::default();
        memory.rows.lock().unwrap().extend(
            samples
                .into_iter()
                .enumerate()
                .map(|(i, sample)| Stored {
                    id: i as i64 + 1,
                    sample,
                }),
        );
        memory
    }
}

#[async_trait::async_trait]
impl Repository for Memory {
    async fn migrate(&self) -> anyhow::Result<()> {
        self.check()
    }
    async fn count(&self) -> anyhow::Result<i64> {
        self.check()?;
        Ok(self.rows.lock().unwrap().len() as i64)
    }
    async fn fetch(&self) -> anyhow::Result<Vec<Stored>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }
    async fn append(&self, samples: &[Sample]) -> anyhow::Result<u64> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let next = rows.len() as i64 + 1;
        rows.extend(samples.iter().enumerate().map(|(i, sample)| Stored {
            id: next + i as i64,
            sample: *sample,
        }));
        Ok(samples.len() as u64)
    }
}
