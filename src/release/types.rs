//! Wire types of the go.dev release index

use serde::Deserialize;

use crate::config::SOURCE_KIND;

/// A single release entry from the release index
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Release {
    /// Release label, e.g. "go1.22.3"
    pub version: String,
    /// Whether upstream marks the release as production-ready
    pub stable: bool,
    #[serde(default)]
    pub files: Vec<ReleaseFile>,
}

/// A downloadable artifact of a release
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReleaseFile {
    pub filename: String,
    /// Hex-encoded SHA-256 of the artifact
    pub sha256: String,
    /// Artifact kind, e.g. "source", "archive" or "installer"
    pub kind: String,
}

impl Release {
    /// Returns the first file whose kind is "source"
    pub fn source_file(&self) -> Option<&ReleaseFile> {
        self.files.iter().find(|file| file.kind == SOURCE_KIND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file(filename: &str, sha256: &str, kind: &str) -> ReleaseFile {
        ReleaseFile {
            filename: filename.to_string(),
            sha256: sha256.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn release_deserializes_and_ignores_unknown_fields() {
        let release = serde_json::from_value::<Release>(json!({
            "version": "go1.22.3",
            "stable": true,
            "files": [{
                "filename": "go1.22.3.src.tar.gz",
                "os": "",
                "arch": "",
                "version": "go1.22.3",
                "sha256": "80648ef34f903193d72a59c0dff019f5f98ae0c9aa13ade0b0ecbff991a76f68",
                "size": 27596392,
                "kind": "source"
            }]
        }))
        .unwrap();

        assert_eq!(
            release,
            Release {
                version: "go1.22.3".to_string(),
                stable: true,
                files: vec![file(
                    "go1.22.3.src.tar.gz",
                    "80648ef34f903193d72a59c0dff019f5f98ae0c9aa13ade0b0ecbff991a76f68",
                    "source"
                )],
            }
        );
    }

    #[test]
    fn release_without_files_defaults_to_empty() {
        let release = serde_json::from_value::<Release>(json!({
            "version": "go1.22.3",
            "stable": false
        }))
        .unwrap();

        assert!(release.files.is_empty());
    }

    #[test]
    fn source_file_returns_first_source_kind() {
        let release = Release {
            version: "go1.21.0".to_string(),
            stable: true,
            files: vec![
                file("go1.21.0.linux-amd64.tar.gz", "01", "archive"),
                file("go1.21.0.src.tar.gz", "02", "source"),
                file("go1.21.0.src.zip", "03", "source"),
            ],
        };

        assert_eq!(release.source_file().map(|f| f.sha256.as_str()), Some("02"));
    }

    #[test]
    fn source_file_returns_none_without_source_kind() {
        let release = Release {
            version: "go1.21.0".to_string(),
            stable: true,
            files: vec![file("go1.21.0.windows-amd64.msi", "01", "installer")],
        };

        assert_eq!(release.source_file(), None);
    }
}
