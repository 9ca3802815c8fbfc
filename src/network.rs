//! Snapshots of a road network as read from a network description.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A road network description.
///
/// Junctions and streets are kept in file order, which determines how
/// ties between equally short routes are settled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescription {
    #[serde(default)]
    pub junctions: Vec<JunctionRecord>,
    #[serde(default)]
    pub streets: Vec<StreetRecord>,
}

/// A junction and its position in network coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JunctionRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// A street and the junctions it connects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetRecord {
    pub id: String,
    pub from: String,
    pub to: String,
}

impl NetworkDescription {
    /// Parses a network description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a network description from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}
