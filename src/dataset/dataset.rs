// Read-only after construction:
// no mutation
// no "update" methods
// verified on load

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::catalog::{Branch, College, CutoffData};
use crate::dataset::builder::DatasetError;
use crate::dataset::manifest::{
    compute_dataset_version, DatasetManifest, BRANCHES_FILE, COLLEGES_FILE, CUTOFFS_FILE,
    MANIFEST_FILE,
};
use crate::obs;
use crate::types::identifiers::ContentHash;

#[derive(Debug)]
pub struct ReferenceDataset {
    pub root: PathBuf,
    pub manifest: DatasetManifest,
    pub colleges: Vec<College>,
    pub branches: Vec<Branch>,
    pub cutoffs: Vec<CutoffData>,
}

impl ReferenceDataset {
    /// Load a dataset directory, verifying every file against the manifest.
    pub fn open(root: &Path) -> Result<Self, DatasetError> {
        let f = fs::File::open(root.join(MANIFEST_FILE))?;
        let manifest: DatasetManifest = serde_json::from_reader(f)?;

        let expected_version = compute_dataset_version(&manifest.build_config, &manifest.files)?;
        if expected_version != manifest.dataset_version {
            return Err(DatasetError::VersionMismatch {
                expected: manifest.dataset_version.clone(),
                actual: expected_version,
            });
        }

        let colleges: Vec<College> = load_verified(root, &manifest, COLLEGES_FILE)?;
        let branches: Vec<Branch> = load_verified(root, &manifest, BRANCHES_FILE)?;
        let cutoffs: Vec<CutoffData> = load_verified(root, &manifest, CUTOFFS_FILE)?;

        obs::emit_dataset_loaded(&manifest.dataset_version, cutoffs.len());

        Ok(ReferenceDataset {
            root: root.to_path_buf(),
            manifest,
            colleges,
            branches,
            cutoffs,
        })
    }

    pub fn dataset_version(&self) -> &str {
        &self.manifest.dataset_version
    }
}

fn load_verified<T: DeserializeOwned>(
    root: &Path,
    manifest: &DatasetManifest,
    file: &'static str,
) -> Result<Vec<T>, DatasetError> {
    let entry = manifest.entry(file).ok_or(DatasetError::MissingEntry(file))?;
    let bytes = fs::read(root.join(file))?;

    let actual = ContentHash::from_content(&bytes);
    if actual != entry.hash {
        obs::emit_dataset_integrity_failure(file, entry.hash.as_str(), actual.as_str());
        return Err(DatasetError::HashMismatch {
            file: file.to_string(),
            expected: entry.hash.as_str().to_string(),
            actual: actual.as_str().to_string(),
        });
    }

    let records: Vec<T> = serde_json::from_slice(&bytes)?;
    if records.len() != entry.records {
        return Err(DatasetError::CountMismatch {
            file: file.to_string(),
            expected: entry.records,
            actual: records.len(),
        });
    }
    Ok(records)
}
