//! JSON persistence for the version map and the latest version record

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::release::error::StoreError;
use crate::release::version::LatestVersion;

/// Digest record for one patch release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// SRI string, e.g. "sha256-<base64>"
    pub sha256: String,
}

/// Persisted mapping of "major.minor" -> "patch" -> record.
///
/// Keys are kept sorted so the serialized file is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionMap(BTreeMap<String, BTreeMap<String, VersionRecord>>);

impl VersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the record for a (major.minor, patch) key
    pub fn get(&self, major_minor: &str, patch: &str) -> Option<&VersionRecord> {
        self.0.get(major_minor)?.get(patch)
    }

    pub fn contains(&self, major_minor: &str, patch: &str) -> bool {
        self.get(major_minor, patch).is_some()
    }

    /// Insert a record, creating the minor line if needed
    pub fn insert(&mut self, major_minor: &str, patch: &str, record: VersionRecord) {
        self.0
            .entry(major_minor.to_string())
            .or_default()
            .insert(patch.to_string(), record);
    }

    /// Number of recorded patch releases across all minor lines
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load the version map, treating a missing file as an empty map
pub fn load_version_map(path: &Path) -> Result<VersionMap, StoreError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No version map at {:?}, starting empty", path);
            return Ok(VersionMap::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let map: VersionMap = serde_json::from_str(&data).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} recorded versions from {:?}", map.len(), path);

    Ok(map)
}

/// Overwrite the version map file with indented JSON
pub fn save_version_map(path: &Path, map: &VersionMap) -> Result<(), StoreError> {
    write_json(path, map)?;
    debug!("Wrote {} recorded versions to {:?}", map.len(), path);
    Ok(())
}

/// Overwrite the latest version file with indented JSON
pub fn save_latest_version(path: &Path, latest: &LatestVersion) -> Result<(), StoreError> {
    write_json(path, latest)?;
    debug!("Wrote latest version {} to {:?}", latest, path);
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let data = serde_json::to_string_pretty(value)?;
    std::fs::write(path, data).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
