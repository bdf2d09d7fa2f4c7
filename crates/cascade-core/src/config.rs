//! Named configuration options.
//!
//! Each option is an enumerated choice built by the caller and validated
//! once, before any run starts.

use cascade_records::round_to;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{check_unit, DiffusionError};

/// How seed nodes are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeedSelection {
    /// Uniform sample without replacement
    #[default]
    Random,
    /// Highest-degree nodes first
    MaxDegree,
}

impl SeedSelection {
    /// Label fragment used in configuration labels.
    pub fn label(&self) -> &'static str {
        match self {
            SeedSelection::Random => "random",
            SeedSelection::MaxDegree => "degree",
        }
    }
}

/// How the IC activation probability is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProbabilityMode {
    /// A caller-chosen probability
    Fixed { value: f64 },
    /// Drawn once from `[min, max]`, rounded to two decimals
    RandomInRange { min: f64, max: f64 },
}

impl Default for ProbabilityMode {
    fn default() -> Self {
        ProbabilityMode::RandomInRange {
            min: 0.05,
            max: 0.5,
        }
    }
}

impl ProbabilityMode {
    pub fn validate(&self) -> Result<(), DiffusionError> {
        match *self {
            ProbabilityMode::Fixed { value } => check_unit("p", value).map(|_| ()),
            ProbabilityMode::RandomInRange { min, max } => {
                check_unit("p_min", min)?;
                check_unit("p_max", max)?;
                if min > max {
                    return Err(DiffusionError::InvalidParameter {
                        name: "p_min",
                        value: min,
                    });
                }
                Ok(())
            }
        }
    }

    /// Produces the probability a run will use.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            ProbabilityMode::Fixed { value } => value,
            ProbabilityMode::RandomInRange { min, max } => {
                round_to(rng.gen_range(min..=max), 2).clamp(min, max)
            }
        }
    }

    /// Label fragment for a resolved probability: `p=0.1` or `p~0.23`.
    pub fn label(&self, resolved: f64) -> String {
        match self {
            ProbabilityMode::Fixed { .. } => format!("p={}", resolved),
            ProbabilityMode::RandomInRange { .. } => format!("p~{}", resolved),
        }
    }
}

/// How Linear Threshold assigns per-node thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ThresholdMode {
    /// Independent uniform draw in [0, 1) per node
    #[default]
    AutoRandom,
    /// One constant for every node
    Fixed { value: f64 },
}

impl ThresholdMode {
    pub fn validate(&self) -> Result<(), DiffusionError> {
        match *self {
            ThresholdMode::AutoRandom => Ok(()),
            ThresholdMode::Fixed { value } => check_unit("threshold", value).map(|_| ()),
        }
    }

    /// `auto` or `fixed_<value>`.
    pub fn label(&self) -> String {
        match self {
            ThresholdMode::AutoRandom => "auto".to_string(),
            ThresholdMode::Fixed { value } => format!("fixed_{}", value),
        }
    }
}
