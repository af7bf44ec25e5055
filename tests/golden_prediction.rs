use admission_core::catalog::CollegeType;
use admission_core::prediction::Predictor;
use admission_core::sample;
use admission_core::types::{PredictionFilters, PredictionResult};

#[test]
fn golden_prediction_output_serialization() {
    let filters = PredictionFilters::new(195.0, "BC").with_college_types([CollegeType::Government]);
    let result = Predictor::default().predict(
        &filters,
        &sample::colleges(),
        &sample::branches(),
        &sample::cutoffs(),
    );

    let json_str = serde_json::to_string_pretty(&result).unwrap();

    // Key order: candidates before summary, tier before score
    let candidates_pos = json_str.find("\"candidates\":").expect("Missing candidates key");
    let summary_pos = json_str.find("\"summary\":").expect("Missing summary key");
    assert!(candidates_pos < summary_pos);

    const EXPECTED_JSON: &str = r#"{
      "candidates": [
        {
          "college": {
            "id": "anna-ceg",
            "name": "Anna University - College of Engineering Guindy",
            "location": "Guindy, Chennai",
            "district": "Chennai",
            "college_type": "government",
            "naac_grade": "A++",
            "established": 1794,
            "website": "https://www.annauniv.edu",
            "facilities": ["Library", "Hostel", "Labs", "Sports Complex"]
          },
          "branch": {
            "id": "cse",
            "name": "Computer Science and Engineering",
            "code": "CSE",
            "duration_years": 4
          },
          "cutoffs": [
            {
              "id": "anna-ceg-cse-bc-2023",
              "college_id": "anna-ceg",
              "branch_id": "cse",
              "year": 2023,
              "category": "BC",
              "cutoff_mark": 198.0,
              "opening_rank": null,
              "closing_rank": null
            }
          ],
          "probability": "medium",
          "probability_score": 35.0,
          "fees": {
            "tuition": 50000,
            "hostel": 40000,
            "total": 90000
          }
        }
      ],
      "summary": {
        "score": 195.0,
        "category": "BC",
        "colleges_considered": 3,
        "colleges_filtered": 2,
        "pairs_without_data": 2,
        "pairs_below_threshold": 0,
        "candidates_returned": 1
      }
    }"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = EXPECTED_JSON.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(normalized_actual, normalized_expected, "JSON structure mismatch against golden snapshot");

    let deserialized: PredictionResult = serde_json::from_str(&json_str).expect("Deserialization failed");
    assert_eq!(deserialized, result);
}

#[test]
fn college_type_wire_names() {
    let json = serde_json::to_string(&CollegeType::ALL).unwrap();
    assert_eq!(json, r#"["government","aided","self-financing"]"#);

    for t in CollegeType::ALL {
        assert_eq!(t.as_str().parse::<CollegeType>().unwrap(), t);
    }
    assert!("private".parse::<CollegeType>().is_err());
}

#[test]
fn filters_deserialize_with_defaults() {
    let filters: PredictionFilters = serde_json::from_str(r#"{"score": 180.5, "category": "MBC"}"#).unwrap();
    assert_eq!(filters, PredictionFilters::new(180.5, "MBC"));

    let filters: PredictionFilters = serde_json::from_str(
        r#"{"score": 180.5, "category": "MBC", "college_types": ["self-financing"], "branches": ["ece"]}"#,
    )
    .unwrap();
    assert_eq!(
        filters,
        PredictionFilters::new(180.5, "MBC")
            .with_college_types([CollegeType::SelfFinancing])
            .with_branches(["ece"])
    );
}
