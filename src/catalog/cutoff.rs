use serde::{Deserialize, Serialize};

use crate::types::identifiers::{BranchId, CollegeId, CutoffId};

/// One historical admission record for a (college, branch, category, year).
///
/// Records are append-only reference data: a new year adds a record, it
/// never rewrites an old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoffData {
    pub id: CutoffId,
    pub college_id: CollegeId,
    pub branch_id: BranchId,
    pub year: u16,
    pub category: String,
    pub cutoff_mark: f64,
    #[serde(default)]
    pub opening_rank: Option<u32>,
    #[serde(default)]
    pub closing_rank: Option<u32>,
}

/// The most recent record by year. Same-year records resolve to the
/// greatest id so the choice never depends on input order.
pub fn latest(cutoffs: &[CutoffData]) -> Option<&CutoffData> {
    cutoffs
        .iter()
        .max_by(|a, b| a.year.cmp(&b.year).then_with(|| a.id.cmp(&b.id)))
}
