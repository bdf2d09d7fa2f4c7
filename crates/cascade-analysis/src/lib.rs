//! Analysis layer over the diffusion engines.
//!
//! Runs the Independent Cascade and Linear Threshold engines from
//! `cascade-core` in experiments: side-by-side comparisons, parameter
//! sweeps and structural rankings. Results are written as JSON Lines
//! records from `cascade-records`.
//!
//! # Architecture
//!
//! ```text
//! graph.json ──▶ load_graph ──▶ run_experiment ──▶ RecordWriter ──▶ *.jsonl
//!                                    ▲
//!                           analysis.toml (AnalysisConfig)
//! ```
//!
//! # Modules
//!
//! - [`config`]: TOML experiment configuration
//! - [`comparison`]: IC vs LT over a shared seed set
//! - [`sensitivity`]: Parameter sweeps with per-value failure isolation
//! - [`centrality`]: Betweenness centrality
//! - [`influence`]: Degree ranking, structure vs spread, LT node summaries
//! - [`experiment`]: Full experiment orchestration
//! - [`input`]: Graph file loading
//! - [`output`]: Result file writing

pub mod centrality;
pub mod comparison;
pub mod config;
pub mod error;
pub mod experiment;
pub mod influence;
pub mod input;
pub mod output;
pub mod sensitivity;

pub use centrality::betweenness_centrality;
pub use comparison::{compare, IcComparison, LtComparison};
pub use config::{
    default_config_toml, AnalysisConfig, ConfigError, IcConfig, InfluenceConfig, LtConfig,
    SensitivityConfig,
};
pub use error::{AnalysisError, OutputError};
pub use experiment::{ic_label, lt_label, run_experiment, ExperimentReport};
pub use influence::{lt_summary, structure_vs_diffusion, top_influencers};
pub use input::{load_graph, parse_graph};
pub use output::{read_jsonl, RecordWriter, RunSummary};
pub use sensitivity::{sensitivity_ic, sensitivity_lt, sweep, SweepTarget};
