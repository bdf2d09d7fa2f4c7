//! Linear Threshold
//!
//! Multi-seed propagation to a fixed point. A node activates once the
//! fraction of its active neighbors reaches its threshold. Every round reads
//! the active set as it stood at the end of the previous round, so nodes
//! activated within a round never influence each other in that same round.

use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::config::ThresholdMode;
use crate::error::DiffusionError;
use crate::graph::InfluenceGraph;
use crate::state::Cascade;

/// Result of an LT run.
#[derive(Debug, Clone, PartialEq)]
pub struct LtOutcome<N> {
    pub cascade: Cascade<N>,
    /// Threshold assigned to every node at the start of the run
    pub thresholds: BTreeMap<N, f64>,
}

impl<N: Clone + Ord> LtOutcome<N> {
    pub fn activated_count(&self) -> usize {
        self.cascade.activated_count()
    }

    pub fn round_count(&self) -> usize {
        self.cascade.round_count()
    }

    pub fn threshold(&self, node: &N) -> Option<f64> {
        self.thresholds.get(node).copied()
    }
}

/// Validated Linear Threshold parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearThreshold {
    mode: ThresholdMode,
}

impl LinearThreshold {
    pub fn new(mode: ThresholdMode) -> Result<Self, DiffusionError> {
        mode.validate()?;
        Ok(Self { mode })
    }

    /// Shorthand for a fixed threshold shared by all nodes.
    pub fn fixed(threshold: f64) -> Result<Self, DiffusionError> {
        Self::new(ThresholdMode::Fixed { value: threshold })
    }

    pub fn mode(&self) -> ThresholdMode {
        self.mode
    }

    /// Runs LT from the given seeds.
    ///
    /// Random thresholds are drawn once per node in `graph.nodes()` order; a
    /// fixed mode draws nothing. An empty seed set yields the trivial run
    /// with a single empty round.
    pub fn run<G, R>(
        &self,
        graph: &G,
        seeds: &[G::Node],
        rng: &mut R,
    ) -> Result<LtOutcome<G::Node>, DiffusionError>
    where
        G: InfluenceGraph + ?Sized,
        R: Rng + ?Sized,
    {
        if let Some(missing) = seeds.iter().find(|s| !graph.contains(s)) {
            return Err(DiffusionError::node_not_found(missing));
        }

        let thresholds: BTreeMap<G::Node, f64> = graph
            .nodes()
            .into_iter()
            .map(|v| {
                let t = match self.mode {
                    ThresholdMode::AutoRandom => rng.gen::<f64>(),
                    ThresholdMode::Fixed { value } => value,
                };
                (v, t)
            })
            .collect();

        let mut cascade = Cascade::seeded(seeds.iter().cloned().collect());
        if cascade.activated().is_empty() {
            return Ok(LtOutcome { cascade, thresholds });
        }

        // Nodes without neighbors can never activate and are left out.
        let candidates: Vec<(G::Node, BTreeSet<G::Node>, f64)> = thresholds
            .iter()
            .filter(|(v, _)| !cascade.is_active(v))
            .filter_map(|(v, &t)| {
                let neighbors: BTreeSet<G::Node> = graph
                    .predecessors(v)
                    .into_iter()
                    .chain(graph.successors(v))
                    .collect();
                (!neighbors.is_empty()).then(|| (v.clone(), neighbors, t))
            })
            .collect();

        loop {
            let mut next = BTreeSet::new();
            for (v, neighbors, threshold) in &candidates {
                if cascade.is_active(v) {
                    continue;
                }
                let active = neighbors.iter().filter(|u| cascade.is_active(u)).count();
                let influence = active as f64 / neighbors.len() as f64;
                if influence >= *threshold {
                    next.insert(v.clone());
                }
            }

            if next.is_empty() {
                break;
            }
            cascade.record_round(next);
        }

        debug!(
            seeds = seeds.len(),
            mode = %self.mode.label(),
            activated = cascade.activated_count(),
            rounds = cascade.round_count(),
            "linear threshold reached fixed point"
        );

        Ok(LtOutcome { cascade, thresholds })
    }
}

/// Runs a single LT diffusion with the given threshold mode.
pub fn linear_threshold<G, R>(
    graph: &G,
    seeds: &[G::Node],
    mode: ThresholdMode,
    rng: &mut R,
) -> Result<LtOutcome<G::Node>, DiffusionError>
where
    G: InfluenceGraph + ?Sized,
    R: Rng + ?Sized,
{
    LinearThreshold::new(mode)?.run(graph, seeds, rng)
}
