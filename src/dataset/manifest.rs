use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::types::identifiers::ContentHash;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DatasetBuildConfig {
    pub version: String,
    pub hash_algorithm: String,
}

impl DatasetBuildConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            hash_algorithm: "sha256".into(),
        }
    }
}

pub const COLLEGES_FILE: &str = "colleges.json";
pub const BRANCHES_FILE: &str = "branches.json";
pub const CUTOFFS_FILE: &str = "cutoffs.json";
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManifestFileEntry {
    pub file: String,
    pub hash: ContentHash,
    pub records: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DatasetManifest {
    pub dataset_version: String,
    pub build_config: DatasetBuildConfig,
    pub created_at: DateTime<Utc>, // informational only
    /// Always colleges, branches, cutoffs in that order.
    pub files: Vec<ManifestFileEntry>,
}

impl DatasetManifest {
    pub fn entry(&self, file: &str) -> Option<&ManifestFileEntry> {
        self.files.iter().find(|e| e.file == file)
    }
}

/// sha256 over the serialized config followed by one `file:hash` line per entry.
pub fn compute_dataset_version(
    config: &DatasetBuildConfig,
    files: &[ManifestFileEntry],
) -> Result<String, serde_json::Error> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(config)?);
    for entry in files {
        let line = format!("{}:{}", entry.file, entry.hash.as_str());
        hasher.update(line.as_bytes());
    }
    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}
