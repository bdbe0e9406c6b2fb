use std::collections::HashMap;
use std::sync::Arc;

use moka::future::Cache;
use serde::Serialize;
use tracing::debug;

use crate::error::TimezoneResult;
use crate::models::timezone::TimezoneDescriptor;
use crate::store::TimezoneStore;

/// Zones bucketed by region. `regions` is sorted ascending and each bucket
/// keeps the `list_all` order.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct RegionGroups {
    pub regions: Vec<String>,
    pub zones: HashMap<String, Vec<TimezoneDescriptor>>,
}

// store is read-only after seeding, so cached lookups never expire
pub struct Catalog {
    store: Arc<dyn TimezoneStore>,
    lookups: Cache<String, TimezoneDescriptor>,
}

impl Catalog {
    pub fn new(store: Arc<dyn TimezoneStore>, cache_capacity: u64) -> Self {
        Catalog {
            store,
            lookups: Cache::new(cache_capacity),
        }
    }

    /// Exact, case-sensitive match. `Ok(None)` for an unknown zone.
    pub async fn lookup(&self, identifier: &str) -> TimezoneResult<Option<TimezoneDescriptor>> {
        if let Some(descriptor) = self.lookups.get(identifier).await {
            return Ok(Some(descriptor));
        }

        let found = self.store.find_one(identifier).await?;
        match &found {
            Some(descriptor) => {
                self.lookups
                    .insert(identifier.to_string(), descriptor.clone())
                    .await;
            }
            None => debug!("No timezone registered as {}", identifier),
        }

        Ok(found)
    }

    pub async fn list_all(&self) -> TimezoneResult<Vec<TimezoneDescriptor>> {
        let mut descriptors = self.store.find_all().await?;
        sort_descriptors(&mut descriptors);
        Ok(descriptors)
    }

    pub async fn group_by_region(&self) -> TimezoneResult<RegionGroups> {
        Ok(group_descriptors(self.list_all().await?))
    }

    pub async fn size(&self) -> TimezoneResult<u64> {
        self.store.count().await
    }
}

/// Offset ascending, then label ascending. Stable, so full ties keep
/// insertion order.
pub fn sort_descriptors(descriptors: &mut [TimezoneDescriptor]) {
    descriptors.sort_by(|a, b| {
        a.offset
            .total_cmp(&b.offset)
            .then_with(|| a.label.cmp(&b.label))
    });
}

pub fn group_descriptors(sorted: Vec<TimezoneDescriptor>) -> RegionGroups {
    let mut zones: HashMap<String, Vec<TimezoneDescriptor>> = HashMap::new();
    for descriptor in sorted {
        zones
            .entry(descriptor.region.clone())
            .or_default()
            .push(descriptor);
    }

    let mut regions: Vec<String> = zones.keys().cloned().collect();
    regions.sort();

    RegionGroups { regions, zones }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimezoneError;
    use crate::models::manifest::MANIFEST;
    use crate::store::MemoryTimezoneStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn seeded_catalog() -> Catalog {
        let store = MemoryTimezoneStore::new();
        store.insert_many(&MANIFEST).await.unwrap();
        Catalog::new(Arc::new(store), 64)
    }

    #[actix_web::test]
    async fn looks_up_every_descriptor() {
        let catalog = seeded_catalog().await;
        for descriptor in MANIFEST.iter() {
            assert_eq!(
                catalog.lookup(&descriptor.identifier).await.unwrap().as_ref(),
                Some(descriptor)
            );
        }
    }

    #[actix_web::test]
    async fn resolves_tashkent() {
        let catalog = seeded_catalog().await;
        let tashkent = catalog.lookup("Asia/Tashkent").await.unwrap().unwrap();
        assert_eq!(tashkent.offset, 5.0);
        assert_eq!(tashkent.region, "Asia");
    }

    #[actix_web::test]
    async fn unknown_identifier_is_not_an_error() {
        let catalog = seeded_catalog().await;
        assert_eq!(catalog.lookup("Mars/Olympus").await, Ok(None));
        assert_eq!(catalog.lookup("asia/tashkent").await, Ok(None));
    }

    #[actix_web::test]
    async fn lists_in_offset_then_label_order() {
        let catalog = seeded_catalog().await;
        let all = catalog.list_all().await.unwrap();

        assert_eq!(all.len(), MANIFEST.len());
        for pair in all.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.offset < b.offset || (a.offset == b.offset && a.label <= b.label),
                "{} before {}",
                a.identifier,
                b.identifier
            );
        }
    }

    #[test]
    fn full_ties_keep_insertion_order() {
        let mut zones = vec![
            TimezoneDescriptor::new("Asia/B", "Same (UTC+5)", 5.0, "Asia", "B"),
            TimezoneDescriptor::new("Asia/A", "Same (UTC+5)", 5.0, "Asia", "A"),
            TimezoneDescriptor::new("Asia/C", "Earlier (UTC+4)", 4.0, "Asia", "C"),
        ];
        sort_descriptors(&mut zones);

        let order: Vec<_> = zones.iter().map(|z| z.identifier.as_str()).collect();
        assert_eq!(order, ["Asia/C", "Asia/B", "Asia/A"]);
    }

    #[actix_web::test]
    async fn region_groups_partition_the_listing() {
        let catalog = seeded_catalog().await;
        let all = catalog.list_all().await.unwrap();
        let groups = catalog.group_by_region().await.unwrap();

        let mut sorted_regions = groups.regions.clone();
        sorted_regions.sort();
        assert_eq!(groups.regions, sorted_regions);
        assert_eq!(groups.regions.len(), groups.zones.len());

        let total: usize = groups.zones.values().map(Vec::len).sum();
        assert_eq!(total, all.len());

        for region in &groups.regions {
            let expected: Vec<_> = all.iter().filter(|z| &z.region == region).collect();
            let bucket: Vec<_> = groups.zones[region].iter().collect();
            assert_eq!(bucket, expected, "bucket {}", region);
        }
    }

    struct FailingStore;

    #[async_trait]
    impl TimezoneStore for FailingStore {
        async fn count(&self) -> TimezoneResult<u64> {
            Err(TimezoneError::Infrastructure("connection refused".into()))
        }

        async fn find_one(&self, _: &str) -> TimezoneResult<Option<TimezoneDescriptor>> {
            Err(TimezoneError::Infrastructure("connection refused".into()))
        }

        async fn find_all(&self) -> TimezoneResult<Vec<TimezoneDescriptor>> {
            Err(TimezoneError::Infrastructure("connection refused".into()))
        }

        async fn insert_many(&self, _: &[TimezoneDescriptor]) -> TimezoneResult<()> {
            Err(TimezoneError::Infrastructure("connection refused".into()))
        }
    }

    #[actix_web::test]
    async fn store_failure_is_not_reported_as_missing() {
        let catalog = Catalog::new(Arc::new(FailingStore), 8);
        assert!(matches!(
            catalog.lookup("Asia/Tashkent").await,
            Err(TimezoneError::Infrastructure(_))
        ));
        assert!(catalog.list_all().await.is_err());
    }

    struct CountingStore {
        inner: MemoryTimezoneStore,
        reads: AtomicUsize,
    }

    #[async_trait]
    impl TimezoneStore for CountingStore {
        async fn count(&self) -> TimezoneResult<u64> {
            self.inner.count().await
        }

        async fn find_one(&self, identifier: &str) -> TimezoneResult<Option<TimezoneDescriptor>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.find_one(identifier).await
        }

        async fn find_all(&self) -> TimezoneResult<Vec<TimezoneDescriptor>> {
            self.inner.find_all().await
        }

        async fn insert_many(&self, records: &[TimezoneDescriptor]) -> TimezoneResult<()> {
            self.inner.insert_many(records).await
        }
    }

    #[actix_web::test]
    async fn repeated_lookups_hit_the_cache() {
        let store = Arc::new(CountingStore {
            inner: MemoryTimezoneStore::new(),
            reads: AtomicUsize::new(0),
        });
        store.insert_many(&MANIFEST).await.unwrap();
        let catalog = Catalog::new(store.clone(), 8);

        for _ in 0..3 {
            assert!(catalog.lookup("Asia/Kolkata").await.unwrap().is_some());
        }
        assert_eq!(store.reads.load(Ordering::SeqCst), 1);
    }
}
