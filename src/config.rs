use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

use crate::conversion::SuffixStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    /// Falls back to the in-memory store when unset.
    pub mongodb_uri: Option<String>,
    pub mongodb_database: String,
    pub timezone_collection: String,
    pub suffix_style: SuffixStyle,
    pub lookup_cache_capacity: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let suffix_style = match get("OFFSET_SUFFIX_STYLE") {
            Some(value) => SuffixStyle::parse(&value).ok_or_else(|| {
                anyhow!("OFFSET_SUFFIX_STYLE must be `legacy` or `exact`, got {value:?}")
            })?,
            None => SuffixStyle::default(),
        };

        Ok(Config {
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(get("PORT"), "PORT", 80)?,
            mongodb_uri: get("MONGODB_URI"),
            mongodb_database: get("MONGODB_DATABASE").unwrap_or_else(|| "booking".to_string()),
            timezone_collection: get("TIMEZONE_COLLECTION")
                .unwrap_or_else(|| "timezones".to_string()),
            suffix_style,
            lookup_cache_capacity: parse_or(
                get("LOOKUP_CACHE_CAPACITY"),
                "LOOKUP_CACHE_CAPACITY",
                256,
            )?,
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}: {raw:?}")),
        None => Ok(default),
    }
}
