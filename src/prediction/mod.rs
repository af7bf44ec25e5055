pub mod filters;
pub mod probability;
pub mod threshold;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::catalog::{Branch, BranchId, College, CollegeId, CutoffData};
use crate::config::PredictorConfig;
use crate::dataset::ReferenceDataset;
use crate::obs;
use crate::types::{CollegeWithCutoff, PredictionFilters, PredictionResult, PredictionSummary};
use filters::{branch_passes, college_passes};
pub use probability::{compute_probability, from_margin, CutoffMarginModel, ProbabilityModel};
pub use threshold::{apply_threshold, ScoredPair, ThresholdResult};

pub struct Predictor<M> {
	model: M,
	config: PredictorConfig,
}

impl Default for Predictor<CutoffMarginModel> {
	fn default() -> Self {
		Self {
			model: CutoffMarginModel,
			config: PredictorConfig::v0(),
		}
	}
}

impl<M> Predictor<M>
where
	M: ProbabilityModel,
{
	pub fn new(model: M, config: PredictorConfig) -> Self {
		Self { model, config }
	}

	pub fn config(&self) -> &PredictorConfig {
		&self.config
	}

	pub fn predict(
		&self,
		filters: &PredictionFilters,
		colleges: &[College],
		branches: &[Branch],
		cutoffs: &[CutoffData],
	) -> PredictionResult {
		obs::emit_prediction_started(filters.score, &filters.category, colleges.len(), branches.len());

		// 0. Index the category's history by (college, branch)
		let mut history: BTreeMap<(&CollegeId, &BranchId), Vec<CutoffData>> = BTreeMap::new();
		for record in cutoffs.iter().filter(|c| c.category == filters.category) {
			history
				.entry((&record.college_id, &record.branch_id))
				.or_default()
				.push(record.clone());
		}
		for records in history.values_mut() {
			records.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.id.cmp(&b.id)));
		}

		// 1. Filtering + scoring phase
		let mut scored: Vec<ScoredPair> = Vec::new();
		let mut colleges_filtered = 0;
		let mut pairs_without_data = 0;

		for college in colleges {
			if !college_passes(filters, college) {
				colleges_filtered += 1;
				continue;
			}
			for branch in branches.iter().filter(|b| branch_passes(filters, b)) {
				let Some(matched) = history.get(&(&college.id, &branch.id)) else {
					pairs_without_data += 1;
					continue;
				};
				let probability = self.model.assess(filters.score, matched);
				scored.push(ScoredPair {
					college,
					branch,
					cutoffs: matched.clone(),
					probability,
				});
			}
		}

		// 2. Threshold phase
		let ThresholdResult {
			mut candidates,
			below_threshold,
		} = apply_threshold(scored, self.config.inclusion_threshold, &self.config.fees);

		// 3. Ordering phase
		// Sort globally by (score desc, college id asc, branch id asc)
		candidates.sort_by(compare_candidates);

		debug_assert!(candidates
			.windows(2)
			.all(|w| compare_candidates(&w[0], &w[1]) != Ordering::Greater));

		let summary = PredictionSummary {
			score: filters.score,
			category: filters.category.clone(),
			colleges_considered: colleges.len(),
			colleges_filtered,
			pairs_without_data,
			pairs_below_threshold: below_threshold,
			candidates_returned: candidates.len(),
		};
		obs::emit_prediction_finished(&summary);

		PredictionResult { candidates, summary }
	}

	pub fn predict_dataset(&self, dataset: &ReferenceDataset, filters: &PredictionFilters) -> PredictionResult {
		self.predict(filters, &dataset.colleges, &dataset.branches, &dataset.cutoffs)
	}
}

fn compare_candidates(a: &CollegeWithCutoff, b: &CollegeWithCutoff) -> Ordering {
	// Descending score
	b.probability_score
		.partial_cmp(&a.probability_score)
		.unwrap_or(Ordering::Equal)
		.then_with(|| a.college.id.cmp(&b.college.id))
		.then_with(|| a.branch.id.cmp(&b.branch.id))
}

/// Score and rank every (college, branch) pair with the default model and
/// configuration.
pub fn rank_candidates(
	filters: &PredictionFilters,
	colleges: &[College],
	branches: &[Branch],
	cutoffs: &[CutoffData],
) -> Vec<CollegeWithCutoff> {
	Predictor::default()
		.predict(filters, colleges, branches, cutoffs)
		.candidates
}
