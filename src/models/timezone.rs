use serde::{Deserialize, Serialize};

/// One supported zone. Stored as one document per zone, unique on `identifier`.
///
/// Only `offset` takes part in conversion arithmetic; `label` and
/// `abbreviation` are for display. Abbreviations repeat across zones.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimezoneDescriptor {
    /// Canonical `Region/City` key.
    pub identifier: String,
    pub label: String,
    /// Hours ahead of UTC, negative when behind. May be fractional.
    pub offset: f64,
    pub region: String,
    pub abbreviation: String,
}

impl TimezoneDescriptor {
    pub fn new(
        identifier: &str,
        label: &str,
        offset: f64,
        region: &str,
        abbreviation: &str,
    ) -> Self {
        TimezoneDescriptor {
            identifier: identifier.to_string(),
            label: label.to_string(),
            offset,
            region: region.to_string(),
            abbreviation: abbreviation.to_string(),
        }
    }
}
