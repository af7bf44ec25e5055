pub mod identifiers;
pub mod prediction;

pub use identifiers::{BranchId, CollegeId, ContentHash, CutoffId};
pub use prediction::{
    CollegeWithCutoff, FeeEstimate, PredictionFilters, PredictionResult, PredictionSummary,
    Probability, ProbabilityTier,
};
