use crate::catalog::{Branch, College};
use crate::types::PredictionFilters;

/// Ownership and district constraints. Empty type list admits every type.
pub fn college_passes(filters: &PredictionFilters, college: &College) -> bool {
    if !filters.college_types.is_empty() && !filters.college_types.contains(&college.college_type) {
        return false;
    }
    match &filters.preferred_district {
        Some(district) => &college.district == district,
        None => true,
    }
}

pub fn branch_passes(filters: &PredictionFilters, branch: &Branch) -> bool {
    filters.branches.is_empty() || filters.branches.contains(&branch.id)
}
