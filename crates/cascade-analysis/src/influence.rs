//! Structural Influence
//!
//! Ranks nodes by their position in the graph and sets that ranking next to
//! the spread they actually achieve under IC.

use rand::Rng;
use std::cmp::Reverse;
use tracing::info;

use cascade_core::rng::fork;
use cascade_core::{DiffusionError, IndependentCascade, InfluenceGraph, LtOutcome};
use cascade_records::{round_to, InfluencerRow, NodeSummary, StructureDiffusionRow};

use crate::centrality::betweenness_centrality;

/// The `k` highest-degree nodes with their betweenness centrality.
///
/// Ties keep `nodes()` order.
pub fn top_influencers<G>(graph: &G, k: usize) -> Vec<InfluencerRow>
where
    G: InfluenceGraph + ?Sized,
{
    let betweenness = betweenness_centrality(graph);

    let mut ranked: Vec<(usize, G::Node)> = graph
        .nodes()
        .into_iter()
        .map(|v| (graph.degree(&v), v))
        .collect();
    ranked.sort_by_key(|(degree, _)| Reverse(*degree));

    let rows: Vec<InfluencerRow> = ranked
        .into_iter()
        .take(k)
        .map(|(degree, v)| InfluencerRow {
            betweenness: round_to(betweenness.get(&v).copied().unwrap_or(0.0), 4),
            node: v.to_string(),
            degree,
        })
        .collect();

    info!(k, reported = rows.len(), "ranked structural influencers");
    rows
}

/// Degree, betweenness and IC spread for each seed.
///
/// Every seed runs on its own forked stream.
pub fn structure_vs_diffusion<G, R>(
    graph: &G,
    seeds: &[G::Node],
    probability: f64,
    max_rounds: usize,
    rng: &mut R,
) -> Result<Vec<StructureDiffusionRow>, DiffusionError>
where
    G: InfluenceGraph + ?Sized,
    R: Rng + ?Sized,
{
    let ic = IndependentCascade::new(probability, max_rounds)?;
    let betweenness = betweenness_centrality(graph);

    seeds
        .iter()
        .map(|seed| {
            let out = ic.run(graph, seed, &mut fork(&mut *rng))?;
            Ok(StructureDiffusionRow {
                node: seed.to_string(),
                degree: graph.degree(seed),
                betweenness: round_to(betweenness.get(seed).copied().unwrap_or(0.0), 4),
                influence_ic: out.activated_count(),
            })
        })
        .collect()
}

/// Per-node table of an LT run, in `nodes()` order.
pub fn lt_summary<G>(graph: &G, outcome: &LtOutcome<G::Node>) -> Vec<NodeSummary>
where
    G: InfluenceGraph + ?Sized,
{
    graph
        .nodes()
        .into_iter()
        .map(|v| NodeSummary {
            degree: graph.degree(&v),
            threshold: round_to(outcome.threshold(&v).unwrap_or(0.0), 3),
            activated: outcome.cascade.is_active(&v),
            activation_step: outcome.cascade.activation_step(&v),
            node: v.to_string(),
        })
        .collect()
}
