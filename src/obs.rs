//! Structured tracing events for prediction and dataset lifecycle.
//!
//! The crate never installs a subscriber. Prediction events are `debug!`,
//! dataset events are `info!`, integrity failures are `warn!`.

use tracing::{debug, info, warn};

use crate::types::PredictionSummary;

pub fn emit_prediction_started(score: f64, category: &str, colleges: usize, branches: usize) {
    debug!(
        event = "prediction.started",
        score = score,
        category = %category,
        colleges = colleges,
        branches = branches,
    );
}

pub fn emit_prediction_finished(summary: &PredictionSummary) {
    debug!(
        event = "prediction.finished",
        category = %summary.category,
        colleges_considered = summary.colleges_considered,
        colleges_filtered = summary.colleges_filtered,
        pairs_without_data = summary.pairs_without_data,
        pairs_below_threshold = summary.pairs_below_threshold,
        candidates = summary.candidates_returned,
    );
}

pub fn emit_dataset_built(dataset_version: &str, colleges: usize, branches: usize, cutoffs: usize) {
    info!(
        event = "dataset.built",
        dataset_version = %dataset_version,
        colleges = colleges,
        branches = branches,
        cutoffs = cutoffs,
    );
}

pub fn emit_dataset_loaded(dataset_version: &str, cutoffs: usize) {
    info!(event = "dataset.loaded", dataset_version = %dataset_version, cutoffs = cutoffs);
}

pub fn emit_dataset_integrity_failure(file: &str, expected: &str, actual: &str) {
    warn!(
        event = "dataset.integrity_failure",
        file = %file,
        expected = %expected,
        actual = %actual,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitters_are_callable_without_subscriber() {
        let summary = PredictionSummary {
            score: 195.0,
            category: "OC".into(),
            colleges_considered: 3,
            colleges_filtered: 0,
            pairs_without_data: 1,
            pairs_below_threshold: 0,
            candidates_returned: 2,
        };
        emit_prediction_started(195.0, "OC", 3, 2);
        emit_prediction_finished(&summary);
        emit_dataset_built("sha256:abc", 3, 2, 12);
        emit_dataset_loaded("sha256:abc", 12);
        emit_dataset_integrity_failure("cutoffs.json", "sha256:a", "sha256:b");
    }
}
