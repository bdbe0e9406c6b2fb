use tracing::debug;

use crate::catalog::{Catalog, RegionGroups};
use crate::conversion::{SuffixStyle, convert_between_zones, current_instant_in_zone};
use crate::error::{TimezoneError, TimezoneResult};
use crate::models::requests::{ConversionResponse, ConvertRequest, ZoneNow};
use crate::models::timezone::TimezoneDescriptor;

pub async fn list_timezones(catalog: &Catalog) -> TimezoneResult<Vec<TimezoneDescriptor>> {
    catalog.list_all().await
}

pub async fn grouped_timezones(catalog: &Catalog) -> TimezoneResult<RegionGroups> {
    catalog.group_by_region().await
}

pub async fn resolve_timezone(
    catalog: &Catalog,
    region: &str,
    city: &str,
    style: SuffixStyle,
) -> TimezoneResult<ZoneNow> {
    let timezone = require(catalog, &format!("{}/{}", region, city)).await?;
    let current_time = current_instant_in_zone(timezone.offset, style);

    Ok(ZoneNow {
        timezone,
        current_time,
    })
}

/// Converts `dateTime` from one registered zone to another. All three fields
/// are checked before the catalog is touched.
pub async fn convert_timestamp(
    catalog: &Catalog,
    request: ConvertRequest,
) -> TimezoneResult<ConversionResponse> {
    let (from, to, date_time) = required_fields(request)?;

    let from_timezone = require(catalog, &from).await?;
    let to_timezone = require(catalog, &to).await?;

    let conversion = convert_between_zones(&date_time, from_timezone.offset, to_timezone.offset)?;

    Ok(ConversionResponse {
        from_timezone,
        to_timezone,
        date_time,
        utc_instant: conversion.utc_instant,
        converted_instant: conversion.converted_instant,
    })
}

fn required_fields(request: ConvertRequest) -> TimezoneResult<(String, String, String)> {
    let present = |field: Option<String>| field.filter(|value| !value.trim().is_empty());
    let fields = (
        present(request.from_timezone),
        present(request.to_timezone),
        present(request.date_time),
    );

    match fields {
        (Some(from), Some(to), Some(date_time)) => Ok((from, to, date_time)),
        (from, to, date_time) => {
            let missing: Vec<&str> = [
                ("fromTimezone", from.is_none()),
                ("toTimezone", to.is_none()),
                ("dateTime", date_time.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();

            Err(TimezoneError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

async fn require(catalog: &Catalog, identifier: &str) -> TimezoneResult<TimezoneDescriptor> {
    match catalog.lookup(identifier).await? {
        Some(descriptor) => Ok(descriptor),
        None => {
            debug!("Rejecting request for unknown timezone {}", identifier);
            Err(TimezoneError::NotFound(identifier.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::manifest::MANIFEST;
    use crate::store::{MemoryTimezoneStore, TimezoneStore};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn catalog() -> Catalog {
        let store = MemoryTimezoneStore::new();
        store.insert_many(&MANIFEST).await.unwrap();
        Catalog::new(Arc::new(store), 16)
    }

    fn request(from: Option<&str>, to: Option<&str>, date_time: Option<&str>) -> ConvertRequest {
        ConvertRequest {
            from_timezone: from.map(str::to_string),
            to_timezone: to.map(str::to_string),
            date_time: date_time.map(str::to_string),
        }
    }

    #[actix_web::test]
    async fn converts_between_registered_zones() {
        let catalog = catalog().await;
        let response = convert_timestamp(
            &catalog,
            request(
                Some("Asia/Karachi"),
                Some("America/Los_Angeles"),
                Some("2024-01-01T00:00:00Z"),
            ),
        )
        .await
        .unwrap();

        assert_eq!(response.from_timezone.offset, 5.0);
        assert_eq!(response.to_timezone.offset, -8.0);
        assert_eq!(
            response.utc_instant,
            Utc.with_ymd_and_hms(2023, 12, 31, 19, 0, 0).unwrap()
        );
        assert_eq!(
            response.converted_instant,
            Utc.with_ymd_and_hms(2023, 12, 31, 11, 0, 0).unwrap()
        );
    }

    struct UntouchableStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TimezoneStore for UntouchableStore {
        async fn count(&self) -> TimezoneResult<u64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        }

        async fn find_one(&self, _: &str) -> TimezoneResult<Option<TimezoneDescriptor>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        async fn find_all(&self) -> TimezoneResult<Vec<TimezoneDescriptor>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn insert_many(&self, _: &[TimezoneDescriptor]) -> TimezoneResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[actix_web::test]
    async fn missing_field_fails_before_any_lookup() {
        let store = Arc::new(UntouchableStore {
            calls: AtomicUsize::new(0),
        });
        let catalog = Catalog::new(store.clone(), 4);

        let result = convert_timestamp(
            &catalog,
            request(Some("Asia/Karachi"), None, Some("2024-01-01T00:00:00Z")),
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            TimezoneError::Validation("missing required fields: toTimezone".to_string())
        );
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn names_every_missing_field() {
        let catalog = catalog().await;
        let result = convert_timestamp(&catalog, request(None, Some(" "), None)).await;

        assert_eq!(
            result.unwrap_err(),
            TimezoneError::Validation(
                "missing required fields: fromTimezone, toTimezone, dateTime".to_string()
            )
        );
    }

    #[actix_web::test]
    async fn unknown_zone_is_not_found() {
        let catalog = catalog().await;
        let result = convert_timestamp(
            &catalog,
            request(Some("Mars/Olympus"), Some("Etc/UTC"), Some("2024-01-01")),
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            TimezoneError::NotFound("Mars/Olympus".to_string())
        );
    }

    #[actix_web::test]
    async fn malformed_instant_is_a_validation_error() {
        let catalog = catalog().await;
        let result = convert_timestamp(
            &catalog,
            request(Some("Asia/Kolkata"), Some("Etc/UTC"), Some("tomorrow at noon")),
        )
        .await;

        assert!(matches!(result, Err(TimezoneError::Validation(_))));
    }

    #[actix_web::test]
    async fn resolves_region_and_city() {
        let catalog = catalog().await;

        let zone = resolve_timezone(&catalog, "Asia", "Kathmandu", SuffixStyle::Exact)
            .await
            .unwrap();
        assert_eq!(zone.timezone.offset, 5.75);
        assert!(zone.current_time.ends_with("+05:45"));

        let missing = resolve_timezone(&catalog, "Mars", "Olympus", SuffixStyle::Legacy).await;
        assert!(matches!(missing, Err(TimezoneError::NotFound(_))));
    }
}
