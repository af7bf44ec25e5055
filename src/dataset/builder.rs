use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Branch, College, CutoffData};
use crate::dataset::dataset::ReferenceDataset;
use crate::dataset::manifest::{
    compute_dataset_version, DatasetBuildConfig, DatasetManifest, ManifestFileEntry,
    BRANCHES_FILE, COLLEGES_FILE, CUTOFFS_FILE, MANIFEST_FILE,
};
use crate::obs;
use crate::types::identifiers::ContentHash;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output directory already exists: {0}")]
    OutputExists(PathBuf),
    #[error("Duplicate {kind} ID: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("Cutoff {cutoff} references unknown {kind} {id}")]
    DanglingReference {
        cutoff: String,
        kind: &'static str,
        id: String,
    },
    #[error("Cutoff {0} has a non-finite cutoff mark")]
    InvalidCutoffMark(String),
    #[error("Manifest is missing an entry for {0}")]
    MissingEntry(&'static str),
    #[error("Hash mismatch for {file}: manifest says {expected}, content hashes to {actual}")]
    HashMismatch {
        file: String,
        expected: String,
        actual: String,
    },
    #[error("Record count mismatch for {file}: manifest says {expected}, found {actual}")]
    CountMismatch {
        file: String,
        expected: usize,
        actual: usize,
    },
    #[error("Dataset version mismatch: manifest says {expected}, files hash to {actual}")]
    VersionMismatch { expected: String, actual: String },
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),
}

/// DatasetBuilder is single-threaded and non-reentrant.
pub struct DatasetBuilder {
    config: DatasetBuildConfig,
}

impl DatasetBuilder {
    pub fn new(config: DatasetBuildConfig) -> Self {
        Self { config }
    }

    pub fn build(
        &self,
        colleges: Vec<College>,
        branches: Vec<Branch>,
        cutoffs: Vec<CutoffData>,
        output_dir: &Path,
    ) -> Result<ReferenceDataset, DatasetError> {
        if output_dir.exists() {
            return Err(DatasetError::OutputExists(output_dir.to_path_buf()));
        }

        // 1. Sort each collection by ID to ensure determinism
        let mut colleges = colleges;
        let mut branches = branches;
        let mut cutoffs = cutoffs;
        colleges.sort_by(|a, b| a.id.cmp(&b.id));
        branches.sort_by(|a, b| a.id.cmp(&b.id));
        cutoffs.sort_by(|a, b| a.id.cmp(&b.id));

        // 2. Validate ids and references
        reject_duplicates("college", colleges.iter().map(|c| c.id.as_str()))?;
        reject_duplicates("branch", branches.iter().map(|b| b.id.as_str()))?;
        reject_duplicates("cutoff", cutoffs.iter().map(|c| c.id.as_str()))?;

        let college_ids: BTreeSet<_> = colleges.iter().map(|c| &c.id).collect();
        let branch_ids: BTreeSet<_> = branches.iter().map(|b| &b.id).collect();
        for cutoff in &cutoffs {
            if !cutoff.cutoff_mark.is_finite() {
                return Err(DatasetError::InvalidCutoffMark(cutoff.id.to_string()));
            }
            if !college_ids.contains(&cutoff.college_id) {
                return Err(DatasetError::DanglingReference {
                    cutoff: cutoff.id.to_string(),
                    kind: "college",
                    id: cutoff.college_id.to_string(),
                });
            }
            if !branch_ids.contains(&cutoff.branch_id) {
                return Err(DatasetError::DanglingReference {
                    cutoff: cutoff.id.to_string(),
                    kind: "branch",
                    id: cutoff.branch_id.to_string(),
                });
            }
        }

        // 3. Serialize and hash
        let payloads = [
            (COLLEGES_FILE, serde_json::to_vec_pretty(&colleges)?, colleges.len()),
            (BRANCHES_FILE, serde_json::to_vec_pretty(&branches)?, branches.len()),
            (CUTOFFS_FILE, serde_json::to_vec_pretty(&cutoffs)?, cutoffs.len()),
        ];

        let files: Vec<ManifestFileEntry> = payloads
            .iter()
            .map(|(file, bytes, records)| ManifestFileEntry {
                file: file.to_string(),
                hash: ContentHash::from_content(bytes),
                records: *records,
            })
            .collect();

        let dataset_version = compute_dataset_version(&self.config, &files)?;

        // Note: created_at is strictly informational
        let manifest = DatasetManifest {
            dataset_version: dataset_version.clone(),
            build_config: self.config.clone(),
            created_at: Utc::now(),
            files,
        };

        // 4. Write to a temp dir keyed by the dataset version
        let digest = dataset_version
            .strip_prefix("sha256:")
            .filter(|d| d.len() >= 12)
            .ok_or_else(|| DatasetError::InvalidVersionFormat(dataset_version.clone()))?;
        let temp_dir = output_dir.with_extension(format!("tmp.{}", &digest[..12]));

        // Clean up any stale temp dir from a crashed previous run of THIS specific version
        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir)?;
        }
        fs::create_dir_all(&temp_dir)?;

        for (file, bytes, _) in &payloads {
            write_synced(&temp_dir.join(file), bytes)?;
        }
        write_json(&temp_dir.join(MANIFEST_FILE), &manifest)?;

        // 5. Atomic Rename
        fs::rename(&temp_dir, output_dir)?;

        obs::emit_dataset_built(&dataset_version, colleges.len(), branches.len(), cutoffs.len());

        Ok(ReferenceDataset {
            root: output_dir.to_path_buf(),
            manifest,
            colleges,
            branches,
            cutoffs,
        })
    }
}

// Input must already be sorted.
fn reject_duplicates<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DatasetError> {
    let mut previous: Option<&str> = None;
    for id in ids {
        if previous == Some(id) {
            return Err(DatasetError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
        previous = Some(id);
    }
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), DatasetError> {
    let mut f = fs::File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), DatasetError> {
    let f = fs::File::create(path)?;
    serde_json::to_writer_pretty(&f, value)?;
    f.sync_all()?;
    Ok(())
}
