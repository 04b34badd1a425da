//! One-shot pipeline: fetch the index, merge into the stored map, persist, report

use std::io::Write;

use tracing::debug;

use crate::config::SyncConfig;
use crate::release::error::SyncError;
use crate::release::index::ReleaseIndex;
use crate::release::merger::{MergeReport, SkipReason, merge_releases};
use crate::release::store::{load_version_map, save_latest_version, save_version_map};

/// Run one synchronization.
///
/// Progress lines for inserted versions and the latest-version summary are
/// written to `out`. Nothing is written to disk if fetching or loading fails.
/// Fatal errors are returned without being logged.
pub async fn run<I, W>(
    config: &SyncConfig,
    index: &I,
    out: &mut W,
) -> Result<MergeReport, SyncError>
where
    I: ReleaseIndex + ?Sized,
    W: Write,
{
    let releases = index.fetch_releases().await?;
    let mut map = load_version_map(&config.versions_file)?;

    let report = merge_releases(&releases, &mut map);

    for added in &report.added {
        writeln!(
            out,
            "Added version {} with SHA256: {}",
            added.version, added.digest
        )?;
    }

    save_version_map(&config.versions_file, &map)?;

    if let (Some(latest), Some(path)) = (&report.latest, &config.latest_file) {
        save_latest_version(path, latest)?;

        writeln!(out, "\nLatest stable version: {}", latest)?;
    }

    debug!(
        "Synchronized {} releases: {} added, {} already recorded, {} unstable, {} skipped",
        releases.len(),
        report.added.len(),
        report.skipped_count(SkipReason::AlreadyRecorded),
        report.skipped_count(SkipReason::Unstable),
        report.skipped_count(SkipReason::MissingSource)
            + report.skipped_count(SkipReason::UnparseableVersion)
            + report.skipped_count(SkipReason::InvalidDigest),
    );

    Ok(report)
}
