use admission_core::catalog::CutoffData;
use admission_core::prediction::{compute_probability, from_margin};
use admission_core::types::ProbabilityTier;

fn make_cutoff(id: &str, year: u16, cutoff_mark: f64) -> CutoffData {
    CutoffData {
        id: id.into(),
        college_id: "c1".into(),
        branch_id: "cse".into(),
        year,
        category: "OC".to_string(),
        cutoff_mark,
        opening_rank: None,
        closing_rank: None,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn empty_history_is_low_zero_for_any_score() {
    for score in [0.0, 100.0, 200.0, -5.0] {
        let p = compute_probability(score, &[]);
        assert_eq!(p.tier, ProbabilityTier::Low);
        assert_eq!(p.score, 0.0);
    }
}

#[test]
fn boundary_margins() {
    let history = [make_cutoff("a", 2023, 100.0)];

    let p = compute_probability(105.0, &history);
    assert_eq!(p.tier, ProbabilityTier::High, "diff = 5 selects the high band");
    assert_close(p.score, 95.0);

    let p = compute_probability(100.0, &history);
    assert_eq!(p.tier, ProbabilityTier::Medium);
    assert_close(p.score, 60.0);

    let p = compute_probability(97.0, &history);
    assert_eq!(p.tier, ProbabilityTier::Medium);
    assert_close(p.score, 35.0);

    let p = compute_probability(96.9999, &history);
    assert_eq!(p.tier, ProbabilityTier::Low);
}

#[test]
fn margin_one_ulp_below_low_edge_stays_consistent() {
    let diff = f64::from_bits((-3.0f64).to_bits() + 1);
    assert!(diff < -3.0);

    let p = from_margin(diff);
    assert_eq!(p.tier, ProbabilityTier::Low);
    assert!(p.is_consistent(), "inconsistent {p:?}");
    assert_close(p.score, 19.0);

    let history = [make_cutoff("a", 2023, 10.0)];
    let p = compute_probability(6.999999999999999, &history);
    assert_eq!(p.tier, ProbabilityTier::Low);
    assert!(p.is_consistent(), "inconsistent {p:?}");
}

#[test]
fn uses_most_recent_year_only() {
    let history = [
        make_cutoff("a", 2021, 150.0),
        make_cutoff("b", 2023, 100.0),
        make_cutoff("c", 2022, 50.0),
    ];

    // diff against 2023's 100.0 is 2
    let p = compute_probability(102.0, &history);
    assert_eq!(p.tier, ProbabilityTier::Medium);
    assert_close(p.score, 66.0);
}

#[test]
fn same_year_resolves_to_greatest_id_regardless_of_order() {
    let forward = [make_cutoff("a", 2023, 100.0), make_cutoff("b", 2023, 90.0)];
    let reversed = [make_cutoff("b", 2023, 90.0), make_cutoff("a", 2023, 100.0)];

    let p1 = compute_probability(100.0, &forward);
    let p2 = compute_probability(100.0, &reversed);

    assert_eq!(p1, p2);
    // "b" wins: diff 10
    assert_eq!(p1.tier, ProbabilityTier::High);
    assert_close(p1.score, 95.0);
}

#[test]
fn score_always_in_range_and_consistent_with_tier() {
    let history = [make_cutoff("a", 2023, 150.0)];
    let mut applied = 100.0;
    while applied <= 200.0 {
        let p = compute_probability(applied, &history);
        assert!((0.0..=95.0).contains(&p.score), "score {} out of range", p.score);
        assert!(p.is_consistent(), "inconsistent {p:?} at {applied}");
        applied += 0.25;
    }
}

#[test]
fn monotonic_in_applicant_score() {
    let history = [make_cutoff("a", 2023, 150.0)];
    let mut previous = compute_probability(120.0, &history).score;
    let mut applied = 120.0;
    while applied <= 180.0 {
        let score = compute_probability(applied, &history).score;
        assert!(score >= previous, "score decreased from {previous} to {score} at {applied}");
        previous = score;
        applied += 0.1;
    }
}

#[test]
fn nan_inputs_stay_in_range() {
    let history = [make_cutoff("a", 2023, f64::NAN)];
    let p = compute_probability(190.0, &history);
    assert_eq!(p.tier, ProbabilityTier::Low);
    assert_close(p.score, 5.0);
}
