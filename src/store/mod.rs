pub mod memory;
pub mod mongo;

use async_trait::async_trait;

use crate::error::TimezoneResult;
use crate::models::timezone::TimezoneDescriptor;

pub use memory::MemoryTimezoneStore;
pub use mongo::MongoTimezoneStore;

/// Key-value style persistence for descriptors, keyed by identifier.
///
/// Every failure is an infrastructure fault. An absent identifier is `Ok(None)`.
#[async_trait]
pub trait TimezoneStore: Send + Sync {
    async fn count(&self) -> TimezoneResult<u64>;

    async fn find_one(&self, identifier: &str) -> TimezoneResult<Option<TimezoneDescriptor>>;

    // insertion order
    async fn find_all(&self) -> TimezoneResult<Vec<TimezoneDescriptor>>;

    /// Inserts the whole batch or nothing.
    async fn insert_many(&self, records: &[TimezoneDescriptor]) -> TimezoneResult<()>;

    async fn ensure_indexes(&self) -> TimezoneResult<()> {
        Ok(())
    }
}
