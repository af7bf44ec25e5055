use serde::{Deserialize, Serialize};

use crate::catalog::{Branch, College, CollegeType, CutoffData};
use crate::types::identifiers::BranchId;

/// The applicant's query.
///
/// Empty `college_types` / `branches` mean "no constraint". District and
/// category matching are exact string comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionFilters {
    pub score: f64,
    pub category: String,
    #[serde(default)]
    pub preferred_district: Option<String>,
    #[serde(default)]
    pub college_types: Vec<CollegeType>,
    #[serde(default)]
    pub branches: Vec<BranchId>,
}

impl PredictionFilters {
    pub fn new(score: f64, category: impl Into<String>) -> Self {
        Self {
            score,
            category: category.into(),
            preferred_district: None,
            college_types: Vec::new(),
            branches: Vec::new(),
        }
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.preferred_district = Some(district.into());
        self
    }

    pub fn with_college_types(mut self, types: impl IntoIterator<Item = CollegeType>) -> Self {
        self.college_types = types.into_iter().collect();
        self
    }

    pub fn with_branches<I, B>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<BranchId>,
    {
        self.branches = branches.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbabilityTier {
    High,
    Medium,
    Low,
}

/// A tier together with the numeric score that refines it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probability {
    pub tier: ProbabilityTier,
    pub score: f64,
}

impl Probability {
    /// Result for an empty cutoff history.
    pub const NO_DATA: Probability = Probability {
        tier: ProbabilityTier::Low,
        score: 0.0,
    };

    /// Whether `score` lies in the range the band table can produce for `tier`.
    pub fn is_consistent(&self) -> bool {
        match self.tier {
            ProbabilityTier::High => (85.0..=95.0).contains(&self.score),
            ProbabilityTier::Medium => (30.0..=75.0).contains(&self.score),
            ProbabilityTier::Low => (0.0..=19.0).contains(&self.score),
        }
    }
}

/// Estimated yearly fees in the source's currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub tuition: u32,
    pub hostel: u32,
    pub total: u32,
}

/// One ranked admission candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeWithCutoff {
    pub college: College,
    pub branch: Branch,
    /// Every historical record that matched the college, branch and category.
    pub cutoffs: Vec<CutoffData>,
    pub probability: ProbabilityTier,
    pub probability_score: f64,
    pub fees: FeeEstimate,
}

impl CollegeWithCutoff {
    pub fn new(
        college: College,
        branch: Branch,
        cutoffs: Vec<CutoffData>,
        probability: Probability,
        fees: FeeEstimate,
    ) -> Self {
        debug_assert!(probability.is_consistent(), "inconsistent probability {probability:?}");
        Self {
            college,
            branch,
            cutoffs,
            probability: probability.tier,
            probability_score: probability.score,
            fees,
        }
    }
}

/// Counters describing how a prediction narrowed the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub score: f64,
    pub category: String,

    pub colleges_considered: usize,
    pub colleges_filtered: usize,

    /// (college, branch) pairs with no cutoff history for the category.
    pub pairs_without_data: usize,
    pub pairs_below_threshold: usize,
    pub candidates_returned: usize,
}

/// The full outcome of a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub candidates: Vec<CollegeWithCutoff>,
    pub summary: PredictionSummary,
}
