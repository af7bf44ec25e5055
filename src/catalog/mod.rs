pub mod branch;
pub mod college;
pub mod cutoff;
pub mod directory;

use thiserror::Error;

pub use crate::types::identifiers::{BranchId, CollegeId, CutoffId};
pub use branch::Branch;
pub use college::{College, CollegeType};
pub use cutoff::CutoffData;
pub use directory::{branches_offered, search_colleges, DirectoryQuery};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown college type: {0}")]
    UnknownCollegeType(String),
}
