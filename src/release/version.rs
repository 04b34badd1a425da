use std::fmt;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::config::VERSION_PREFIX;

/// Parse a release label like "go1.22.3" into a Version.
///
/// The "go" prefix is removed once if present. The remainder must be exactly
/// three dot-separated decimal numbers. A zero major or minor component is
/// treated as unparseable, which also rules out genuine 0.x releases.
///
/// Examples:
/// - "go1.22.3" -> Version(1, 22, 3)
/// - "go1.21.0" -> Version(1, 21, 0)
/// - "go1.20" -> None (two components)
/// - "go1.21rc2" -> None
pub fn parse_release_label(label: &str) -> Option<Version> {
    let trimmed = label.strip_prefix(VERSION_PREFIX).unwrap_or(label);

    let parts: Vec<&str> = trimmed.split('.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return None;
    };

    let major = parse_component(major)?;
    let minor = parse_component(minor)?;
    let patch = parse_component(patch)?;

    if major == 0 || minor == 0 {
        return None;
    }

    Some(Version::new(major, minor, patch))
}

fn parse_component(component: &str) -> Option<u64> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

/// Highest stable release observed during a run, written to latest-version.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatestVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl LatestVersion {
    /// Replace the current value if `candidate` is strictly newer
    pub fn observe(latest: &mut Option<LatestVersion>, candidate: &Version) {
        let candidate = LatestVersion::from(candidate);
        if latest.is_none_or(|current| candidate > current) {
            *latest = Some(candidate);
        }
    }
}

impl From<&Version> for LatestVersion {
    fn from(version: &Version) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
        }
    }
}

impl fmt::Display for LatestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
