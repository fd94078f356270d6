use serde::{Deserialize, Serialize};

/// What kind of source an evidence item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum EvidenceKind {
    #[strum(to_string = "GitHub Repository")]
    #[serde(rename = "GitHub Repository")]
    GitHubRepository,
    #[strum(to_string = "Local File")]
    #[serde(rename = "Local File")]
    LocalFile,
}

/// A claimed input offered as grounds for skill assessment: a repository URL
/// or the name of a local document. Only the identifier string ever leaves
/// the process; file contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSource {
    #[serde(rename = "type")]
    pub kind: EvidenceKind,
    pub identifier: String,
}

impl EvidenceSource {
    pub fn repository(url: impl Into<String>) -> Self {
        Self {
            kind: EvidenceKind::GitHubRepository,
            identifier: url.into(),
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            kind: EvidenceKind::LocalFile,
            identifier: name.into(),
        }
    }
}

/// Recompute the full evidence list from current form state.
///
/// The trimmed URL (if non-blank) comes first, then one entry per file name
/// in insertion order. No deduplication, no URL shape validation.
pub fn collect_evidence(repo_url: &str, files: &[String]) -> Vec<EvidenceSource> {
    let mut evidence = Vec::with_capacity(files.len() + 1);
    let url = repo_url.trim();
    if !url.is_empty() {
        evidence.push(EvidenceSource::repository(url));
    }
    for name in files {
        evidence.push(EvidenceSource::file(name.clone()));
    }
    evidence
}

/// Remove the first file entry matching `name`. Returns true if one was removed.
pub fn remove_file(files: &mut Vec<String>, name: &str) -> bool {
    if let Some(pos) = files.iter().position(|f| f == name) {
        files.remove(pos);
        true
    } else {
        false
    }
}
