//! Release index test utilities

use async_trait::async_trait;

use go_versions_sync::release::error::FetchError;
use go_versions_sync::release::index::ReleaseIndex;
use go_versions_sync::release::types::{Release, ReleaseFile};

/// In-memory release index returning a fixed list
pub struct StaticIndex {
    releases: Vec<Release>,
}

impl StaticIndex {
    pub fn new(releases: Vec<Release>) -> Self {
        Self { releases }
    }
}

#[async_trait]
impl ReleaseIndex for StaticIndex {
    async fn fetch_releases(&self) -> Result<Vec<Release>, FetchError> {
        Ok(self.releases.clone())
    }
}

/// Release index whose fetch always fails with the given HTTP status
pub struct FailingIndex {
    status: u16,
}

impl FailingIndex {
    pub fn new(status: u16) -> Self {
        Self { status }
    }
}

#[async_trait]
impl ReleaseIndex for FailingIndex {
    async fn fetch_releases(&self) -> Result<Vec<Release>, FetchError> {
        Err(FetchError::Status(self.status))
    }
}

/// Build a release with a source tarball and a binary archive
pub fn release(version: &str, stable: bool, source_sha256: &str) -> Release {
    Release {
        version: version.to_string(),
        stable,
        files: vec![
            ReleaseFile {
                filename: format!("{}.src.tar.gz", version),
                sha256: source_sha256.to_string(),
                kind: "source".to_string(),
            },
            ReleaseFile {
                filename: format!("{}.linux-amd64.tar.gz", version),
                sha256: "00".repeat(32),
                kind: "archive".to_string(),
            },
        ],
    }
}

pub fn release_without_source(version: &str) -> Release {
    Release {
        version: version.to_string(),
        stable: true,
        files: vec![ReleaseFile {
            filename: format!("{}.windows-amd64.msi", version),
            sha256: "00".repeat(32),
            kind: "installer".to_string(),
        }],
    }
}
