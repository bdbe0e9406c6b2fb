use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::TimezoneResult;
use crate::models::timezone::TimezoneDescriptor;
use crate::store::TimezoneStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { inserted: usize },
    AlreadySeeded { existing: u64 },
}

/// First-boot bootstrap of the timezone store.
///
/// The count check and the bulk insert run under one guard, so two tasks
/// seeding the same store at once cannot both see an empty collection.
#[derive(Default)]
pub struct Seeder {
    guard: Mutex<()>,
}

impl Seeder {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(
        &self,
        store: &dyn TimezoneStore,
        manifest: &[TimezoneDescriptor],
    ) -> TimezoneResult<SeedOutcome> {
        let _held = self.guard.lock().await;

        let existing = store.count().await?;
        if existing > 0 {
            debug!("Timezone store already holds {} records, skipping seed", existing);
            return Ok(SeedOutcome::AlreadySeeded { existing });
        }

        if let Err(err) = store.insert_many(manifest).await {
            // another process may have seeded between our count and insert
            let existing = store.count().await?;
            if existing > 0 {
                warn!("Seed lost a race, store now holds {} records: {}", existing, err);
                return Ok(SeedOutcome::AlreadySeeded { existing });
            }
            return Err(err);
        }
        info!("Seeded {} timezones", manifest.len());

        Ok(SeedOutcome::Seeded {
            inserted: manifest.len(),
        })
    }
}
