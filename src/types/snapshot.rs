//! Input model: the already-fetched repository metadata the engine consumes.
//!
//! Every collection defaults to empty and every scalar to zero/`None`, so a
//! sparse JSON document deserializes into something the analyzers can walk
//! without special cases. The one structural field that has no default is the
//! `type` tag on a repository entry.

use crate::error::{EngineError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySnapshot {
    pub name: Option<String>,
    pub owner: Option<String>,
    pub attributes: RepositoryAttributes,
    /// Language name to byte count.
    pub languages: BTreeMap<String, u64>,
    pub commits: Vec<Commit>,
    pub pull_requests: Vec<PullRequest>,
    pub issues: Vec<Issue>,
    pub entries: Vec<RepositoryEntry>,
    pub readme: String,
    pub workflow_count: u32,
    pub quality: ExternalQuality,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryAttributes {
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    /// Repository size as reported by the hosting service (KiB on GitHub).
    pub size: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub has_license: bool,
    pub has_wiki: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub author: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Open,
    #[default]
    Closed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequest {
    pub state: ItemState,
    pub created_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
    pub comments: u64,
    pub additions: Option<u64>,
    pub deletions: Option<u64>,
    pub changed_files: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    pub state: ItemState,
    pub comments: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl RepositoryEntry {
    pub fn file(path: &str) -> Self {
        Self::new(path, EntryKind::File)
    }

    pub fn dir(path: &str) -> Self {
        Self::new(path, EntryKind::Dir)
    }

    fn new(path: &str, kind: EntryKind) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self {
            name,
            path: path.to_string(),
            kind,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Measurements produced outside the engine, when a caller has them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalQuality {
    pub code_smells: Option<u32>,
    /// Line coverage percentage in [0, 100].
    pub test_coverage: Option<f64>,
}

impl RepositorySnapshot {
    /// `owner/name` when both are known, else whichever one is.
    pub fn full_name(&self) -> Option<String> {
        match (self.owner.as_deref(), self.name.as_deref()) {
            (Some(owner), Some(name)) => Some(format!("{owner}/{name}")),
            (None, Some(name)) => Some(name.to_string()),
            (Some(owner), None) => Some(owner.to_string()),
            (None, None) => None,
        }
    }

    /// Parse a snapshot from JSON, reporting shape problems as a snapshot
    /// contract violation rather than a generic JSON error.
    pub fn from_json(raw: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(raw)
            .map_err(|error| EngineError::InvalidSnapshot(error.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(EngineError::InvalidSnapshot(format!(
                    "entries[{index}] has an empty name"
                )));
            }
            if entry.path.trim().is_empty() {
                return Err(EngineError::InvalidSnapshot(format!(
                    "entries[{index}] ({}) has an empty path",
                    entry.name
                )));
            }
        }

        for (index, pull) in self.pull_requests.iter().enumerate() {
            if let (Some(created), Some(merged)) = (pull.created_at, pull.merged_at) {
                if merged < created {
                    return Err(EngineError::InvalidSnapshot(format!(
                        "pull_requests[{index}] was merged before it was created"
                    )));
                }
            }
        }

        if self.languages.keys().any(|language| language.trim().is_empty()) {
            return Err(EngineError::InvalidSnapshot(
                "languages contains an empty language name".to_string(),
            ));
        }

        if let Some(coverage) = self.quality.test_coverage {
            if !coverage.is_finite() || !(0.0..=100.0).contains(&coverage) {
                return Err(EngineError::InvalidSnapshot(format!(
                    "quality.test_coverage must be between 0 and 100 (found {coverage})"
                )));
            }
        }

        Ok(())
    }
}
