//! Folds fetched releases into the persisted version map

use semver::Version;
use tracing::{debug, warn};

use crate::release::digest::{format_sri, hex_to_base64};
use crate::release::store::{VersionMap, VersionRecord};
use crate::release::types::Release;
use crate::release::version::{LatestVersion, parse_release_label};

/// A record inserted during a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedVersion {
    pub version: Version,
    /// Base64 digest without the "sha256-" prefix
    pub digest: String,
}

/// Why a release did not produce a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Release is not marked stable upstream
    Unstable,
    /// No file of kind "source"
    MissingSource,
    /// Label is not "go<major>.<minor>.<patch>" with non-zero major and minor
    UnparseableVersion,
    /// Source digest is not valid hex
    InvalidDigest,
    /// The (major.minor, patch) key is already recorded
    AlreadyRecorded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRelease {
    pub label: String,
    pub reason: SkipReason,
}

/// Outcome of folding one batch of releases into a version map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Inserted records, in the order the releases were received
    pub added: Vec<AddedVersion>,
    pub skipped: Vec<SkippedRelease>,
    /// Highest stable, parseable release seen, whether or not it was already recorded
    pub latest: Option<LatestVersion>,
}

impl MergeReport {
    fn skip(&mut self, release: &Release, reason: SkipReason) {
        self.skipped.push(SkippedRelease {
            label: release.version.clone(),
            reason,
        });
    }

    /// Count of skipped releases for a given reason
    pub fn skipped_count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }
}

/// Merge releases into `map`, never modifying an existing record.
///
/// Missing source files, unparseable labels and invalid digests are logged
/// and skipped; the remaining releases are still processed.
pub fn merge_releases(releases: &[Release], map: &mut VersionMap) -> MergeReport {
    let mut report = MergeReport::default();

    for release in releases {
        if !release.stable {
            report.skip(release, SkipReason::Unstable);
            continue;
        }

        let Some(source) = release.source_file() else {
            warn!("No source file found for version {}", release.version);
            report.skip(release, SkipReason::MissingSource);
            continue;
        };

        let Some(version) = parse_release_label(&release.version) else {
            warn!("Skipping unparseable version label {}", release.version);
            report.skip(release, SkipReason::UnparseableVersion);
            continue;
        };

        LatestVersion::observe(&mut report.latest, &version);

        let major_minor = format!("{}.{}", version.major, version.minor);
        let patch = version.patch.to_string();
        if map.contains(&major_minor, &patch) {
            debug!("Version {} already recorded", version);
            report.skip(release, SkipReason::AlreadyRecorded);
            continue;
        }

        let digest = match hex_to_base64(&source.sha256) {
            Ok(digest) => digest,
            Err(e) => {
                warn!(
                    "Skipping version {}: source digest {:?} is invalid: {}",
                    release.version, source.sha256, e
                );
                report.skip(release, SkipReason::InvalidDigest);
                continue;
            }
        };

        map.insert(
            &major_minor,
            &patch,
            VersionRecord {
                sha256: format_sri(&digest),
            },
        );
        report.added.push(AddedVersion { version, digest });
    }

    report
}
