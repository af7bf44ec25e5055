pub mod builder;
pub mod dataset;
pub mod manifest;

pub use builder::{DatasetBuilder, DatasetError};
pub use dataset::ReferenceDataset;
pub use manifest::{DatasetBuildConfig, DatasetManifest, ManifestFileEntry};
