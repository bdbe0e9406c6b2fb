use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{TimezoneError, TimezoneResult};
use crate::models::timezone::TimezoneDescriptor;
use crate::store::TimezoneStore;

/// Process-local store, used when no MongoDB URI is configured.
#[derive(Default)]
pub struct MemoryTimezoneStore {
    records: RwLock<Vec<TimezoneDescriptor>>,
}

impl MemoryTimezoneStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TimezoneStore for MemoryTimezoneStore {
    async fn count(&self) -> TimezoneResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn find_one(&self, identifier: &str) -> TimezoneResult<Option<TimezoneDescriptor>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.identifier == identifier)
            .cloned())
    }

    async fn find_all(&self) -> TimezoneResult<Vec<TimezoneDescriptor>> {
        Ok(self.records.read().await.clone())
    }

    async fn insert_many(&self, records: &[TimezoneDescriptor]) -> TimezoneResult<()> {
        let mut stored = self.records.write().await;

        // unique index on identifier: check the whole batch before writing any of it
        let mut seen: HashSet<&str> = stored.iter().map(|r| r.identifier.as_str()).collect();
        for record in records {
            if !seen.insert(record.identifier.as_str()) {
                return Err(TimezoneError::Infrastructure(format!(
                    "duplicate identifier {}",
                    record.identifier
                )));
            }
        }

        stored.extend_from_slice(records);
        Ok(())
    }
}
