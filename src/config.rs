use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::Context;

// =============================================================================
// Upstream and file constants
// =============================================================================

/// go.dev download index, including unstable and archived releases
pub const DEFAULT_INDEX_URL: &str = "https://go.dev/dl/?mode=json&include=all";

/// Default path of the version map, relative to the working directory
pub const DEFAULT_VERSIONS_FILE: &str = "go-versions.json";

/// Default path of the latest stable version record
pub const DEFAULT_LATEST_FILE: &str = "latest-version.json";

/// Prefix stripped from release labels ("go1.22.3" -> "1.22.3")
pub const VERSION_PREFIX: &str = "go";

/// File kind identifying the source tarball of a release
pub const SOURCE_KIND: &str = "source";

/// Hash algorithm prefix of SRI digests
pub const SRI_PREFIX: &str = "sha256";

pub const USER_AGENT: &str = "go-versions-sync";

/// Sync configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    /// Release index endpoint
    pub index_url: String,
    /// Version map, read at start and overwritten at the end
    pub versions_file: PathBuf,
    /// Latest version record; `None` disables writing it
    pub latest_file: Option<PathBuf>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            versions_file: PathBuf::from(DEFAULT_VERSIONS_FILE),
            latest_file: Some(PathBuf::from(DEFAULT_LATEST_FILE)),
        }
    }
}

impl SyncConfig {
    /// Read a JSON config file; missing fields fall back to the defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }
}
