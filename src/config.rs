use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CollegeType;
use crate::types::FeeEstimate;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Inclusion threshold must be a finite score in [0, 95], got {0}")]
    InvalidThreshold(f64),
    #[error("Total fee for {0} is lower than its tuition")]
    InvalidFee(CollegeType),
}

/// Tuition and all-in total for one ownership category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBand {
    pub tuition: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub government: FeeBand,
    pub aided: FeeBand,
    pub self_financing: FeeBand,
    /// Flat, independent of ownership.
    pub hostel: u32,
}

impl FeeSchedule {
    pub fn v0() -> Self {
        Self {
            government: FeeBand { tuition: 50_000, total: 90_000 },
            aided: FeeBand { tuition: 75_000, total: 115_000 },
            self_financing: FeeBand { tuition: 150_000, total: 190_000 },
            hostel: 40_000,
        }
    }

    pub fn band(&self, college_type: CollegeType) -> FeeBand {
        match college_type {
            CollegeType::Government => self.government,
            CollegeType::Aided => self.aided,
            CollegeType::SelfFinancing => self.self_financing,
        }
    }

    pub fn estimate(&self, college_type: CollegeType) -> FeeEstimate {
        let band = self.band(college_type);
        FeeEstimate {
            tuition: band.tuition,
            hostel: self.hostel,
            total: band.total,
        }
    }
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    pub version: String,
    /// Candidates must score strictly above this to be returned.
    pub inclusion_threshold: f64,
    pub fees: FeeSchedule,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl PredictorConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            inclusion_threshold: 5.0,
            fees: FeeSchedule::v0(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.inclusion_threshold.is_finite() || !(0.0..=95.0).contains(&self.inclusion_threshold) {
            return Err(ConfigError::InvalidThreshold(self.inclusion_threshold));
        }
        for college_type in CollegeType::ALL {
            let band = self.fees.band(college_type);
            if band.total < band.tuition {
                return Err(ConfigError::InvalidFee(college_type));
            }
        }
        Ok(())
    }

    pub fn from_json_path(path: &Path) -> Result<Self, ConfigError> {
        let f = std::fs::File::open(path)?;
        let config: PredictorConfig = serde_json::from_reader(f)?;
        config.validate()?;
        Ok(config)
    }
}
