//! Result records
//!
//! Normalized rows produced by the sensitivity and comparison analyzers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::{DiffusionModel, SweepParameter};

/// A row stored as one line of a JSON Lines file.
pub trait JsonLine: Serialize + DeserializeOwned {
    /// Serializes the row to a single JSON line.
    fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a row from a JSON line.
    fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Model-specific columns of a comparison row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelParams {
    /// Independent Cascade run with activation probability `p`
    Ic { p: f64 },
    /// Linear Threshold run; `threshold` is the seed node's own threshold
    Lt { threshold: f64, threshold_mode: String },
}

/// One row of the IC vs LT comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Seed node label this row is attributed to
    pub seed: String,
    pub model: DiffusionModel,
    pub activated_count: usize,
    /// Number of rounds in the trace, round 0 included
    pub round_count: usize,
    #[serde(flatten)]
    pub params: ModelParams,
    /// Label of the configuration that produced the row
    pub config: String,
}

impl JsonLine for ResultRecord {}

/// One row of a sensitivity sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRecord {
    pub model: DiffusionModel,
    pub parameter: SweepParameter,
    pub value: f64,
    pub activated_count: usize,
    pub round_count: usize,
}

impl JsonLine for SensitivityRecord {}

/// A sweep element that could not be run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepFailure {
    pub parameter: SweepParameter,
    pub value: f64,
    pub error: String,
}

impl JsonLine for SweepFailure {}

/// Outcome of a full sensitivity sweep.
///
/// Failed elements are reported next to the successful ones; a failure never
/// removes or alters records collected for other values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub model: DiffusionModel,
    pub records: Vec<SensitivityRecord>,
    #[serde(default)]
    pub failures: Vec<SweepFailure>,
}

impl SweepReport {
    /// Creates an empty report for the given model.
    pub fn new(model: DiffusionModel) -> Self {
        Self {
            model,
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// True when every swept value produced a record.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Activated counts in sweep order.
    pub fn activated_counts(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.activated_count).collect()
    }

    /// Finds the record for a swept value, if that value succeeded.
    pub fn record_for(&self, value: f64) -> Option<&SensitivityRecord> {
        self.records.iter().find(|r| r.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ic_record() -> ResultRecord {
        ResultRecord {
            seed: "alice".to_string(),
            model: DiffusionModel::IndependentCascade,
            activated_count: 4,
            round_count: 3,
            params: ModelParams::Ic { p: 0.1 },
            config: "IC_degree_p=0.1".to_string(),
        }
    }

    #[test]
    fn test_ic_record_flattens_params() {
        let value: serde_json::Value = serde_json::to_value(ic_record()).unwrap();
        assert_eq!(value["model"], "IC");
        assert_eq!(value["p"], 0.1);
        assert!(value.get("threshold").is_none());
    }

    #[test]
    fn test_lt_record_jsonl() {
        let record = ResultRecord {
            seed: "bob".to_string(),
            model: DiffusionModel::LinearThreshold,
            activated_count: 7,
            round_count: 2,
            params: ModelParams::Lt {
                threshold: 0.412,
                threshold_mode: "auto".to_string(),
            },
            config: "LT_k3_auto".to_string(),
        };

        let line = record.to_jsonl().unwrap();
        assert!(!line.contains('\n'));
        let parsed = ResultRecord::from_jsonl(&line).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_sweep_report_lookup() {
        let mut report = SweepReport::new(DiffusionModel::IndependentCascade);
        report.records.push(SensitivityRecord {
            model: DiffusionModel::IndependentCascade,
            parameter: SweepParameter::Probability,
            value: 0.5,
            activated_count: 2,
            round_count: 2,
        });
        report.failures.push(SweepFailure {
            parameter: SweepParameter::Probability,
            value: 1.5,
            error: "invalid parameter".to_string(),
        });

        assert!(!report.is_complete());
        assert_eq!(report.activated_counts(), vec![2]);
        assert!(report.record_for(0.5).is_some());
        assert!(report.record_for(1.5).is_none());
    }
}
