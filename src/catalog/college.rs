use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::identifiers::CollegeId;
use super::CatalogError;

/// Ownership category of a college. Drives the fee estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollegeType {
    Government,
    Aided,
    SelfFinancing,
}

impl CollegeType {
    pub const ALL: [CollegeType; 3] = [
        CollegeType::Government,
        CollegeType::Aided,
        CollegeType::SelfFinancing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollegeType::Government => "government",
            CollegeType::Aided => "aided",
            CollegeType::SelfFinancing => "self-financing",
        }
    }
}

impl fmt::Display for CollegeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollegeType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollegeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCollegeType(s.to_string()))
    }
}

/// Immutable reference record for one college.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub id: CollegeId,
    pub name: String,
    pub location: String,
    pub district: String,
    pub college_type: CollegeType,
    #[serde(default)]
    pub naac_grade: Option<String>,
    pub established: u16,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
}
