//! Offset arithmetic. Everything here is pure: no catalog access, no shared
//! state, callable from any number of tasks at once.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc};
use serde::Serialize;

use crate::error::{TimezoneError, TimezoneResult};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// How the `±HH:MM` suffix of a current-time string is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuffixStyle {
    /// Compatible with existing clients: integer hours, always `:00`, and no
    /// sign character for negative offsets. Wrong for fractional and negative
    /// zones, but the calendar fields before it are always right.
    #[default]
    Legacy,
    /// Signed hours and minutes, e.g. `+05:45` or `-03:30`.
    Exact,
}

impl SuffixStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" => Some(SuffixStyle::Legacy),
            "exact" => Some(SuffixStyle::Exact),
            _ => None,
        }
    }
}

/// Result of a pivot conversion, both as absolute instants.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub utc_instant: DateTime<Utc>,
    pub converted_instant: DateTime<Utc>,
}

/// An offset in hours as a whole number of milliseconds. `None` when the
/// offset is not finite or does not fit a `TimeDelta`.
pub fn offset_delta(offset_hours: f64) -> Option<TimeDelta> {
    let millis = (offset_hours * MILLIS_PER_HOUR).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_milliseconds(millis as i64)
}

/// Wall-clock time right now in a zone `offset_hours` from UTC.
pub fn current_instant_in_zone(offset_hours: f64, style: SuffixStyle) -> String {
    instant_in_zone(Utc::now(), offset_hours, style)
}

/// Formats `now` shifted by the offset as `YYYY-MM-DDTHH:mm:ss` followed by
/// the offset suffix. The shifted instant's fields are read as UTC since the
/// shift already carries the zone.
pub fn instant_in_zone(now: DateTime<Utc>, offset_hours: f64, style: SuffixStyle) -> String {
    // saturate at the edges of chrono's range instead of failing
    let shifted = offset_delta(offset_hours)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(if offset_hours < 0.0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}",
        shifted.year(),
        shifted.month(),
        shifted.day(),
        shifted.hour(),
        shifted.minute(),
        shifted.second(),
        offset_suffix(offset_hours, style)
    )
}

pub fn offset_suffix(offset_hours: f64, style: SuffixStyle) -> String {
    match style {
        SuffixStyle::Legacy => {
            let sign = if offset_hours >= 0.0 { "+" } else { "" };
            format!("{}{:02}:00", sign, offset_hours.abs().trunc() as i64)
        }
        SuffixStyle::Exact => {
            let minutes = (offset_hours * 60.0).round() as i64;
            let sign = if minutes < 0 { '-' } else { '+' };
            let minutes = minutes.unsigned_abs();
            format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
        }
    }
}

/// Parses a caller supplied instant. RFC 3339 is preferred; naive date-times
/// and bare dates are read as UTC.
pub fn parse_instant(text: &str) -> TimezoneResult<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(TimezoneError::Validation(format!(
        "unparseable dateTime: {:?}",
        text
    )))
}

/// `utc = instant - from`, `converted = utc + to`.
pub fn convert_instant(
    instant: DateTime<Utc>,
    from_offset: f64,
    to_offset: f64,
) -> TimezoneResult<Conversion> {
    let out_of_range = || TimezoneError::Validation("dateTime out of range".to_string());
    let bad_offset =
        |offset: f64| TimezoneError::Validation(format!("offset out of range: {}", offset));

    let from = offset_delta(from_offset).ok_or_else(|| bad_offset(from_offset))?;
    let to = offset_delta(to_offset).ok_or_else(|| bad_offset(to_offset))?;

    let utc_instant = instant
        .checked_sub_signed(from)
        .ok_or_else(out_of_range)?;
    let converted_instant = utc_instant
        .checked_add_signed(to)
        .ok_or_else(out_of_range)?;

    Ok(Conversion {
        utc_instant,
        converted_instant,
    })
}

pub fn convert_between_zones(
    input: &str,
    from_offset: f64,
    to_offset: f64,
) -> TimezoneResult<Conversion> {
    convert_instant(parse_instant(input)?, from_offset, to_offset)
}
