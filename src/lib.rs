//! Deterministic admission-probability prediction for college discovery.
//!
//! `admission-core` provides the reference catalog (colleges, branches,
//! historical cutoffs), a content-hashed on-disk dataset format, a
//! directory search, and the predictor that scores and ranks every
//! (college, branch) pair for an applicant. Prediction is pure: identical
//! inputs always produce identical, identically ordered outputs.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod obs;
pub mod prediction;
pub mod sample;
pub mod types;

pub use catalog::{Branch, College, CollegeType, CutoffData};
pub use config::{FeeSchedule, PredictorConfig};
pub use prediction::{compute_probability, rank_candidates, Predictor};
pub use types::{
    CollegeWithCutoff, FeeEstimate, PredictionFilters, PredictionResult, Probability,
    ProbabilityTier,
};
