//! Model and parameter identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The diffusion model that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffusionModel {
    /// Independent Cascade
    #[serde(rename = "IC")]
    IndependentCascade,
    /// Linear Threshold
    #[serde(rename = "LT")]
    LinearThreshold,
}

impl DiffusionModel {
    /// Short name used in labels and tables.
    pub fn short_name(&self) -> &'static str {
        match self {
            DiffusionModel::IndependentCascade => "IC",
            DiffusionModel::LinearThreshold => "LT",
        }
    }

    /// The parameter a sensitivity sweep varies for this model.
    pub fn swept_parameter(&self) -> SweepParameter {
        match self {
            DiffusionModel::IndependentCascade => SweepParameter::Probability,
            DiffusionModel::LinearThreshold => SweepParameter::Threshold,
        }
    }
}

impl fmt::Display for DiffusionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// The configuration field a sensitivity sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepParameter {
    /// IC activation probability
    #[serde(rename = "p")]
    Probability,
    /// LT fixed threshold constant
    #[serde(rename = "threshold")]
    Threshold,
}

impl SweepParameter {
    /// Name of the parameter as it appears in output rows.
    pub fn name(&self) -> &'static str {
        match self {
            SweepParameter::Probability => "p",
            SweepParameter::Threshold => "threshold",
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
