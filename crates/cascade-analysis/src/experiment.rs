//! Experiment orchestration.
//!
//! Resolves a validated [`AnalysisConfig`] into seeds and a probability,
//! then runs the comparison, structural ranking and both sensitivity sweeps
//! against one graph.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use cascade_core::rng::fork;
use cascade_core::{select_seeds, InfluenceGraph, ProbabilityMode, SeedSelection, ThresholdMode};
use cascade_records::{
    DiffusionModel, InfluencerRow, ResultRecord, StructureDiffusionRow, SweepReport,
};

use crate::comparison::{compare, IcComparison, LtComparison};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::influence::{structure_vs_diffusion, top_influencers};
use crate::sensitivity::{sensitivity_ic, sensitivity_lt};

/// Everything one experiment produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub ic_label: String,
    pub lt_label: String,
    /// Resolved IC probability
    pub probability: f64,
    pub ic_seeds: Vec<String>,
    pub lt_seeds: Vec<String>,
    pub comparison: Vec<ResultRecord>,
    pub influencers: Vec<InfluencerRow>,
    pub structure: Vec<StructureDiffusionRow>,
    pub ic_sensitivity: SweepReport,
    pub lt_sensitivity: SweepReport,
}

/// `IC_<selection>_<probability>`, e.g. `IC_degree_p=0.1`.
pub fn ic_label(selection: SeedSelection, mode: &ProbabilityMode, probability: f64) -> String {
    format!("IC_{}_{}", selection.label(), mode.label(probability))
}

/// `LT_k<count>_<mode>`, e.g. `LT_k3_auto`.
pub fn lt_label(seed_count: usize, mode: &ThresholdMode) -> String {
    format!("LT_k{}_{}", seed_count, mode.label())
}

/// Runs a full experiment.
///
/// Seed selection and probability resolution draw from `rng` first; each
/// later phase then runs on its own fork, in a fixed order.
pub fn run_experiment<G, R>(
    graph: &G,
    config: &AnalysisConfig,
    rng: &mut R,
) -> Result<ExperimentReport, AnalysisError>
where
    G: InfluenceGraph + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;

    let ic_seeds = select_seeds(graph, config.ic.seed_selection, config.ic.seed_count, rng)?;
    let probability = config.ic.probability.resolve(rng);
    let lt_seeds = select_seeds(graph, SeedSelection::Random, config.lt.seed_count, rng)?;

    let ic_label = ic_label(config.ic.seed_selection, &config.ic.probability, probability);
    let lt_label = lt_label(config.lt.seed_count, &config.lt.threshold_mode);
    info!(%ic_label, %lt_label, nodes = graph.node_count(), "experiment configured");

    let comparison = compare(
        graph,
        &IcComparison {
            seeds: ic_seeds.clone(),
            probability,
            max_rounds: config.ic.max_rounds,
            label: ic_label.clone(),
        },
        &LtComparison {
            threshold_mode: config.lt.threshold_mode,
            label: lt_label.clone(),
        },
        &mut fork(rng),
    )?;

    let influencers = top_influencers(graph, config.influence.top_k);
    let structure = structure_vs_diffusion(
        graph,
        &ic_seeds,
        config.influence.structure_probability,
        config.ic.max_rounds,
        &mut fork(rng),
    )?;

    let mut ic_rng = fork(rng);
    let ic_sensitivity = match ic_seeds.first() {
        Some(seed) => sensitivity_ic(
            graph,
            seed,
            &config.sensitivity.probabilities,
            config.ic.max_rounds,
            &mut ic_rng,
        ),
        None => SweepReport::new(DiffusionModel::IndependentCascade),
    };
    let lt_sensitivity = sensitivity_lt(
        graph,
        &lt_seeds,
        &config.sensitivity.thresholds,
        &mut fork(rng),
    );

    Ok(ExperimentReport {
        ic_label,
        lt_label,
        probability,
        ic_seeds: ic_seeds.iter().map(|s| s.to_string()).collect(),
        lt_seeds: lt_seeds.iter().map(|s| s.to_string()).collect(),
        comparison,
        influencers,
        structure,
        ic_sensitivity,
        lt_sensitivity,
    })
}
