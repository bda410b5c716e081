//! Ingest configuration.

use thiserror::Error;

/// Largest accepted upload (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 52_428_800;

pub const MAX_UPLOAD_BYTES_ENV: &str = "XERLENS_MAX_UPLOAD_BYTES";
pub const SUMMARY_ENABLED_ENV: &str = "XERLENS_SUMMARY_ENABLED";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got `{value}`")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Settings for the ingest pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    pub max_upload_bytes: u64,
    /// Ask the configured summary generator for a narrative.
    pub summary_enabled: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            summary_enabled: false,
        }
    }
}

impl IngestConfig {
    /// Load from process environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_UPLOAD_BYTES_ENV) {
            config.max_upload_bytes = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: MAX_UPLOAD_BYTES_ENV,
                expected: "a byte count",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(SUMMARY_ENABLED_ENV) {
            config.summary_enabled = parse_flag(&raw).ok_or_else(|| ConfigError::InvalidValue {
                var: SUMMARY_ENABLED_ENV,
                expected: "true or false",
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = IngestConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, IngestConfig::default());
        assert_eq!(config.max_upload_bytes, 52_428_800);
        assert!(!config.summary_enabled);
    }

    #[test]
    fn reads_overrides() {
        let config = IngestConfig::from_lookup(lookup(&[
            (MAX_UPLOAD_BYTES_ENV, " 1024 "),
            (SUMMARY_ENABLED_ENV, "Yes"),
        ]))
        .unwrap();
        assert_eq!(config.max_upload_bytes, 1024);
        assert!(config.summary_enabled);
    }

    #[test]
    fn rejects_malformed_values() {
        let err = IngestConfig::from_lookup(lookup(&[(MAX_UPLOAD_BYTES_ENV, "50MB")])).unwrap_err();
        assert!(err.to_string().contains(MAX_UPLOAD_BYTES_ENV));

        let err = IngestConfig::from_lookup(lookup(&[(SUMMARY_ENABLED_ENV, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: SUMMARY_ENABLED_ENV, .. }));
    }
}
