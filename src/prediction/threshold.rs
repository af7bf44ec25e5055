use crate::catalog::{Branch, College, CutoffData};
use crate::config::FeeSchedule;
use crate::types::{CollegeWithCutoff, Probability};

/// Internal: a (college, branch) pair that has been assessed but not yet
/// admitted to the result.
#[derive(Debug, Clone)]
pub struct ScoredPair<'a> {
    pub college: &'a College,
    pub branch: &'a Branch,
    pub cutoffs: Vec<CutoffData>,
    pub probability: Probability,
}

pub struct ThresholdResult {
    pub candidates: Vec<CollegeWithCutoff>,
    pub below_threshold: usize,
}

/// Keep pairs scoring strictly above `threshold`, attaching fee estimates.
/// Input order is preserved.
pub fn apply_threshold(scored: Vec<ScoredPair>, threshold: f64, fees: &FeeSchedule) -> ThresholdResult {
    let mut candidates = Vec::new();
    let mut below_threshold = 0;

    for pair in scored {
        if pair.probability.score > threshold {
            candidates.push(CollegeWithCutoff::new(
                pair.college.clone(),
                pair.branch.clone(),
                pair.cutoffs,
                pair.probability,
                fees.estimate(pair.college.college_type),
            ));
        } else {
            below_threshold += 1;
        }
    }

    ThresholdResult {
        candidates,
        below_threshold,
    }
}
