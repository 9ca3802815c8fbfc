//! Routing configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::graph::NamingConvention;

/// The default marker which prefixes internal edge identifiers.
const DEFAULT_INTERNAL_PREFIX: &str = ":";

/// The default character at which canonical junction identifiers begin.
const DEFAULT_JUNCTION_ANCHOR: char = 'J';

/// The default number of attempts made to generate each random route.
const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Settings which control how routes are computed and generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Edges whose identifier starts with this marker are internal to a junction.
    pub internal_prefix: String,
    /// Junction identifiers are normalized by discarding everything before
    /// the first occurrence of this character. `None` disables this.
    pub junction_anchor: Option<char>,
    /// The maximum number of junction pairs tried per generated route.
    pub max_attempts: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            internal_prefix: DEFAULT_INTERNAL_PREFIX.to_string(),
            junction_anchor: Some(DEFAULT_JUNCTION_ANCHOR),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RoutingConfig {
    /// Parses a configuration from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The naming convention used to classify and normalize identifiers.
    pub fn convention(&self) -> NamingConvention {
        NamingConvention::new(&self.internal_prefix, self.junction_anchor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config = RoutingConfig::from_json(r#"{ "max_attempts": 5 }"#).unwrap();
        assert_eq!(config.internal_prefix, ":");
        assert_eq!(config.junction_anchor, Some('J'));
        assert_eq!(config.max_attempts, 5);
    }

    #[test]
    fn anchor_can_be_disabled() {
        let config = RoutingConfig::from_json(r#"{ "junction_anchor": null }"#).unwrap();
        assert_eq!(config.junction_anchor, None);
    }

    #[test]
    fn rejects_bad_json() {
        assert!(RoutingConfig::from_json("{ nope").is_err());
    }

    #[test]
    fn missing_file() {
        let err = RoutingConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
