use serde::{Deserialize, Serialize};

use crate::types::identifiers::BranchId;

/// An academic program, e.g. Computer Science and Engineering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
    /// Short code such as `CSE`.
    pub code: String,
    pub duration_years: u8,
}
