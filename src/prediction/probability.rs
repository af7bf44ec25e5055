use crate::catalog::cutoff::{latest, CutoffData};
use crate::types::{Probability, ProbabilityTier};

pub trait ProbabilityModel {
    /// Assess one (college, branch, category) history for an applicant.
    fn assess(&self, applied_score: f64, cutoffs: &[CutoffData]) -> Probability;
}

/// v0: margin against the most recent cutoff, mapped through four bands.
///
/// | margin        | tier   | score        |
/// |---------------|--------|--------------|
/// | >= 5          | high   | 85 + 2m, <= 95 |
/// | [0, 5)        | medium | 60 + 3m, <= 75 |
/// | [-3, 0)       | medium | 50 + 5m, >= 30 |
/// | < -3          | low    | 25 + 2m, >= 5  |
#[derive(Debug, Default, Clone, Copy)]
pub struct CutoffMarginModel;

impl ProbabilityModel for CutoffMarginModel {
    fn assess(&self, applied_score: f64, cutoffs: &[CutoffData]) -> Probability {
        match latest(cutoffs) {
            Some(record) => from_margin(applied_score - record.cutoff_mark),
            None => Probability::NO_DATA,
        }
    }
}

/// Band mapping, first match wins. NaN fails every comparison and lands in
/// the low band at its floor.
pub fn from_margin(diff: f64) -> Probability {
    let (tier, score) = if diff >= 5.0 {
        (ProbabilityTier::High, (85.0 + diff * 2.0).min(95.0))
    } else if diff >= 0.0 {
        (ProbabilityTier::Medium, (60.0 + diff * 3.0).min(75.0))
    } else if diff >= -3.0 {
        (ProbabilityTier::Medium, (50.0 + diff * 5.0).max(30.0))
    } else {
        // f64::max ignores a NaN operand
        (ProbabilityTier::Low, (25.0 + diff * 2.0).max(5.0))
    };

    let probability = Probability { tier, score };
    debug_assert!((0.0..=95.0).contains(&score), "score {score} out of range [0, 95]");
    debug_assert!(probability.is_consistent());
    probability
}

/// Probability of admission given the applicant score and the history of
/// one (college, branch, category). Empty history yields `{low, 0}`.
pub fn compute_probability(applied_score: f64, cutoffs: &[CutoffData]) -> Probability {
    CutoffMarginModel.assess(applied_score, cutoffs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_band(diff: f64, tier: ProbabilityTier, score: f64) {
        let p = from_margin(diff);
        assert_eq!(p.tier, tier, "tier for diff {diff}");
        assert!((p.score - score).abs() < 1e-9, "score for diff {diff}: {} != {score}", p.score);
    }

    #[test]
    fn band_edges() {
        assert_band(5.0, ProbabilityTier::High, 95.0);
        assert_band(4.999, ProbabilityTier::Medium, 74.997);
        assert_band(0.0, ProbabilityTier::Medium, 60.0);
        assert_band(-3.0, ProbabilityTier::Medium, 35.0);
        assert_band(-3.0001, ProbabilityTier::Low, 18.9998);
    }

    #[test]
    fn clamps() {
        assert_band(40.0, ProbabilityTier::High, 95.0);
        assert_band(-100.0, ProbabilityTier::Low, 5.0);
        assert_band(-10.0, ProbabilityTier::Low, 5.0);
    }

    #[test]
    fn low_edge_rounding() {
        let just_below = f64::from_bits((-3.0f64).to_bits() + 1);
        let p = from_margin(just_below);
        assert_eq!(p.tier, ProbabilityTier::Low);
        assert!(p.is_consistent());
    }

    #[test]
    fn nan_margin_is_low_floor() {
        assert_band(f64::NAN, ProbabilityTier::Low, 5.0);
    }
}
