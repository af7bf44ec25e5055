use std::collections::BTreeSet;

use super::{Branch, College, CollegeType, CutoffData};
use crate::types::identifiers::CollegeId;

/// A normalized directory search.
/// Normalization rules:
/// - Lowercase
/// - Split on whitespace
/// - No terms matches every college
#[derive(Debug, Clone, Default)]
pub struct DirectoryQuery {
    pub raw: String,
    pub terms: Vec<String>,
    pub district: Option<String>,
    pub college_types: Vec<CollegeType>,
}

impl DirectoryQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let terms = raw
            .to_lowercase()
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();

        Self {
            raw,
            terms,
            district: None,
            college_types: Vec::new(),
        }
    }

    pub fn in_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn of_types(mut self, types: impl IntoIterator<Item = CollegeType>) -> Self {
        self.college_types = types.into_iter().collect();
        self
    }

    fn matches(&self, college: &College) -> bool {
        if let Some(district) = &self.district {
            if &college.district != district {
                return false;
            }
        }
        if !self.college_types.is_empty() && !self.college_types.contains(&college.college_type) {
            return false;
        }

        let name = college.name.to_lowercase();
        let location = college.location.to_lowercase();
        self.terms
            .iter()
            .all(|term| name.contains(term.as_str()) || location.contains(term.as_str()))
    }
}

/// Colleges matching `query`, ordered by (name asc, id asc).
pub fn search_colleges<'a>(colleges: &'a [College], query: &DirectoryQuery) -> Vec<&'a College> {
    let mut hits: Vec<&College> = colleges.iter().filter(|c| query.matches(c)).collect();
    hits.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    hits
}

/// Branches with at least one cutoff record at `college_id`, ordered by branch id.
pub fn branches_offered<'a>(
    college_id: &CollegeId,
    cutoffs: &[CutoffData],
    branches: &'a [Branch],
) -> Vec<&'a Branch> {
    let offered: BTreeSet<_> = cutoffs
        .iter()
        .filter(|c| &c.college_id == college_id)
        .map(|c| &c.branch_id)
        .collect();

    let mut result: Vec<&Branch> = branches.iter().filter(|b| offered.contains(&b.id)).collect();
    result.sort_by(|a, b| a.id.cmp(&b.id));
    result
}
