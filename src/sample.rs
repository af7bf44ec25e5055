//! Reference records for three Tamil Nadu engineering colleges.
//!
//! Used by the directory and predictor tests and handy as a seed dataset.

use crate::catalog::{Branch, College, CollegeType, CutoffData};

fn college(
    id: &str,
    name: &str,
    location: &str,
    district: &str,
    college_type: CollegeType,
    naac_grade: &str,
    established: u16,
    website: &str,
    facilities: &[&str],
) -> College {
    College {
        id: id.into(),
        name: name.to_string(),
        location: location.to_string(),
        district: district.to_string(),
        college_type,
        naac_grade: Some(naac_grade.to_string()),
        established,
        website: Some(website.to_string()),
        facilities: facilities.iter().map(|f| f.to_string()).collect(),
    }
}

pub fn colleges() -> Vec<College> {
    vec![
        college(
            "anna-ceg",
            "Anna University - College of Engineering Guindy",
            "Guindy, Chennai",
            "Chennai",
            CollegeType::Government,
            "A++",
            1794,
            "https://www.annauniv.edu",
            &["Library", "Hostel", "Labs", "Sports Complex"],
        ),
        college(
            "psg-tech",
            "PSG College of Technology",
            "Peelamedu, Coimbatore",
            "Coimbatore",
            CollegeType::Aided,
            "A++",
            1951,
            "https://www.psgtech.edu",
            &["Library", "Hostel", "Labs", "Incubation Centre"],
        ),
        college(
            "tce",
            "Thiagarajar College of Engineering",
            "Thiruparankundram, Madurai",
            "Madurai",
            CollegeType::Aided,
            "A",
            1957,
            "https://www.tce.edu",
            &["Library", "Hostel", "Labs"],
        ),
    ]
}

pub fn branches() -> Vec<Branch> {
    [
        ("cse", "Computer Science and Engineering", "CSE"),
        ("ece", "Electronics and Communication Engineering", "ECE"),
        ("mech", "Mechanical Engineering", "MECH"),
    ]
    .into_iter()
    .map(|(id, name, code)| Branch {
        id: id.into(),
        name: name.to_string(),
        code: code.to_string(),
        duration_years: 4,
    })
    .collect()
}

pub fn cutoffs() -> Vec<CutoffData> {
    [
        ("anna-ceg", "cse", 2022, "OC", 199.0),
        ("anna-ceg", "cse", 2023, "OC", 199.5),
        ("anna-ceg", "cse", 2023, "BC", 198.0),
        ("anna-ceg", "ece", 2022, "OC", 197.25),
        ("anna-ceg", "ece", 2023, "OC", 198.0),
        ("anna-ceg", "mech", 2023, "OC", 196.5),
        ("psg-tech", "cse", 2022, "OC", 191.0),
        ("psg-tech", "cse", 2023, "OC", 192.3),
        ("psg-tech", "cse", 2023, "BC", 189.5),
        ("psg-tech", "ece", 2023, "OC", 190.5),
        ("psg-tech", "mech", 2023, "OC", 185.0),
        ("tce", "cse", 2022, "OC", 186.5),
        ("tce", "cse", 2023, "OC", 187.8),
        ("tce", "cse", 2023, "BC", 184.0),
        ("tce", "ece", 2023, "OC", 183.2),
        ("tce", "mech", 2023, "BC", 178.0),
    ]
    .into_iter()
    .map(|(college_id, branch_id, year, category, cutoff_mark)| CutoffData {
        id: format!("{college_id}-{branch_id}-{}-{year}", category.to_lowercase()).into(),
        college_id: college_id.into(),
        branch_id: branch_id.into(),
        year,
        category: category.to_string(),
        cutoff_mark,
        opening_rank: None,
        closing_rank: None,
    })
    .collect()
}
