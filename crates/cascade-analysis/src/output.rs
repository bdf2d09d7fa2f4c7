//! Result files.
//!
//! An experiment is written as one JSON Lines file per table plus a
//! `summary.json` describing the run.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use cascade_records::JsonLine;

use crate::error::OutputError;
use crate::experiment::ExperimentReport;

pub const COMPARISON_FILE: &str = "comparison.jsonl";
pub const SENSITIVITY_IC_FILE: &str = "sensitivity_ic.jsonl";
pub const SENSITIVITY_LT_FILE: &str = "sensitivity_lt.jsonl";
pub const SWEEP_FAILURES_FILE: &str = "sweep_failures.jsonl";
pub const INFLUENCERS_FILE: &str = "influencers.jsonl";
pub const STRUCTURE_FILE: &str = "structure.jsonl";
pub const SUMMARY_FILE: &str = "summary.json";

/// Top-level description of a written experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ic_label: String,
    pub lt_label: String,
    pub probability: f64,
    pub ic_seeds: Vec<String>,
    pub lt_seeds: Vec<String>,
    pub comparison_rows: usize,
    pub sweep_failures: usize,
    /// Files written alongside this summary
    pub files: Vec<String>,
}

/// Writes experiment tables into an output directory.
pub struct RecordWriter {
    output_dir: PathBuf,
    files_written: Vec<String>,
}

impl RecordWriter {
    /// Creates the output directory if it doesn't exist.
    pub fn new(output_dir: &Path) -> Result<Self, OutputError> {
        fs::create_dir_all(output_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            files_written: Vec::new(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn files_written(&self) -> &[String] {
        &self.files_written
    }

    /// Writes `rows` to `file_name`, one JSON object per line.
    pub fn write_jsonl<T: JsonLine>(
        &mut self,
        file_name: &str,
        rows: &[T],
    ) -> Result<PathBuf, OutputError> {
        let path = self.output_dir.join(file_name);
        let mut writer = BufWriter::new(File::create(&path)?);
        for row in rows {
            writeln!(writer, "{}", row.to_jsonl()?)?;
        }
        writer.flush()?;

        self.files_written.push(file_name.to_string());
        Ok(path)
    }

    /// Writes every table of `report` plus `summary.json`.
    pub fn write_report(&mut self, report: &ExperimentReport) -> Result<RunSummary, OutputError> {
        self.write_jsonl(COMPARISON_FILE, &report.comparison)?;
        self.write_jsonl(SENSITIVITY_IC_FILE, &report.ic_sensitivity.records)?;
        self.write_jsonl(SENSITIVITY_LT_FILE, &report.lt_sensitivity.records)?;
        self.write_jsonl(INFLUENCERS_FILE, &report.influencers)?;
        self.write_jsonl(STRUCTURE_FILE, &report.structure)?;

        let failures: Vec<_> = report
            .ic_sensitivity
            .failures
            .iter()
            .chain(&report.lt_sensitivity.failures)
            .cloned()
            .collect();
        self.write_jsonl(SWEEP_FAILURES_FILE, &failures)?;

        let summary = RunSummary {
            ic_label: report.ic_label.clone(),
            lt_label: report.lt_label.clone(),
            probability: report.probability,
            ic_seeds: report.ic_seeds.clone(),
            lt_seeds: report.lt_seeds.clone(),
            comparison_rows: report.comparison.len(),
            sweep_failures: failures.len(),
            files: self.files_written.clone(),
        };
        fs::write(
            self.output_dir.join(SUMMARY_FILE),
            serde_json::to_string_pretty(&summary)?,
        )?;
        self.files_written.push(SUMMARY_FILE.to_string());

        info!(
            dir = %self.output_dir.display(),
            files = self.files_written.len(),
            "experiment written"
        );
        Ok(summary)
    }
}

/// Reads every non-blank line of a JSON Lines file.
pub fn read_jsonl<T: JsonLine>(path: &Path) -> Result<Vec<T>, OutputError> {
    let content = fs::read_to_string(path)?;
    let mut rows = Vec::new();
    for line in content.lines() {
        if !line.trim().is_empty() {
            rows.push(T::from_jsonl(line)?);
        }
    }
    Ok(rows)
}
