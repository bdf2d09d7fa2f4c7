//! Independent Cascade
//!
//! Single-seed, round-based stochastic propagation. Each node activated in
//! the previous round gets one Bernoulli trial against every inactive
//! out-neighbor.

use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::{check_unit, DiffusionError};
use crate::graph::InfluenceGraph;
use crate::state::Cascade;

/// Default bound on the trace length of an IC run.
pub const DEFAULT_MAX_ROUNDS: usize = 20;

/// Result of an IC run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcOutcome<N> {
    pub cascade: Cascade<N>,
    /// The run hit the round bound before reaching a round with no activations
    pub truncated: bool,
}

impl<N: Clone + Ord> IcOutcome<N> {
    pub fn activated_count(&self) -> usize {
        self.cascade.activated_count()
    }

    pub fn round_count(&self) -> usize {
        self.cascade.round_count()
    }
}

/// Validated Independent Cascade parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndependentCascade {
    probability: f64,
    max_rounds: usize,
}

impl IndependentCascade {
    /// Validates `probability` in [0, 1] and `max_rounds >= 1`.
    ///
    /// `max_rounds` bounds the trace length, round 0 included.
    pub fn new(probability: f64, max_rounds: usize) -> Result<Self, DiffusionError> {
        let probability = check_unit("p", probability)?;
        if max_rounds == 0 {
            return Err(DiffusionError::ZeroRounds);
        }
        Ok(Self {
            probability,
            max_rounds,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Runs a cascade from `seed`.
    ///
    /// Every (frontier node, inactive neighbor) pair consumes exactly one
    /// draw, in frontier order then neighbor order. A neighbor reached by
    /// several frontier nodes in the same round gets one trial per node.
    pub fn run<G, R>(
        &self,
        graph: &G,
        seed: &G::Node,
        rng: &mut R,
    ) -> Result<IcOutcome<G::Node>, DiffusionError>
    where
        G: InfluenceGraph + ?Sized,
        R: Rng + ?Sized,
    {
        if !graph.contains(seed) {
            return Err(DiffusionError::node_not_found(seed));
        }

        let mut cascade = Cascade::seeded(BTreeSet::from([seed.clone()]));
        let mut frontier = vec![seed.clone()];
        let mut truncated = false;

        while !frontier.is_empty() {
            if cascade.round_count() >= self.max_rounds {
                truncated = true;
                break;
            }

            let mut next = BTreeSet::new();
            for node in &frontier {
                for neighbor in graph.successors(node) {
                    if cascade.is_active(&neighbor) {
                        continue;
                    }
                    if rng.gen::<f64>() < self.probability {
                        next.insert(neighbor);
                    }
                }
            }

            if next.is_empty() {
                break;
            }
            frontier = next.iter().cloned().collect();
            cascade.record_round(next);
        }

        debug!(
            seed = %seed,
            p = self.probability,
            activated = cascade.activated_count(),
            rounds = cascade.round_count(),
            truncated,
            "independent cascade finished"
        );

        Ok(IcOutcome { cascade, truncated })
    }
}

/// Runs a single IC cascade with the given parameters.
pub fn independent_cascade<G, R>(
    graph: &G,
    seed: &G::Node,
    probability: f64,
    max_rounds: usize,
    rng: &mut R,
) -> Result<IcOutcome<G::Node>, DiffusionError>
where
    G: InfluenceGraph + ?Sized,
    R: Rng + ?Sized,
{
    IndependentCascade::new(probability, max_rounds)?.run(graph, seed, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::rng::seeded;

    #[test]
    fn test_diamond_full_probability() {
        let g = fixtures::diamond();
        let mut rng = seeded(1);
        let out = independent_cascade(&g, &"A".to_string(), 1.0, 20, &mut rng).unwrap();

        assert_eq!(out.activated_count(), 4);
        assert_eq!(
            out.cascade.trace().to_vecs(),
            vec![vec!["A"], vec!["B", "C"], vec!["D"]]
        );
        assert_eq!(out.cascade.activation_step(&"D".to_string()), Some(2));
        assert!(!out.truncated);
    }

    #[test]
    fn test_zero_probability_keeps_seed_only() {
        let g = fixtures::diamond();
        let mut rng = seeded(1);
        let out = independent_cascade(&g, &"A".to_string(), 0.0, 20, &mut rng).unwrap();

        assert_eq!(out.cascade.activated().len(), 1);
        assert_eq!(out.round_count(), 1);
    }

    #[test]
    fn test_sink_seed_terminates_immediately() {
        let g = fixtures::diamond();
        let mut rng = seeded(1);
        let out = independent_cascade(&g, &"D".to_string(), 1.0, 20, &mut rng).unwrap();

        assert_eq!(out.cascade.trace().to_vecs(), vec![vec!["D"]]);
        assert!(!out.truncated);
    }

    #[test]
    fn test_round_bound_truncates() {
        let g = fixtures::path(10);
        let mut rng = seeded(1);
        let out = independent_cascade(&g, &"n0".to_string(), 1.0, 3, &mut rng).unwrap();

        assert_eq!(out.round_count(), 3);
        assert_eq!(out.activated_count(), 3);
        assert!(out.truncated);
    }

    #[test]
    fn test_invalid_inputs() {
        let g = fixtures::diamond();
        let mut rng = seeded(1);

        assert!(matches!(
            IndependentCascade::new(1.5, 20),
            Err(DiffusionError::InvalidParameter { name: "p", .. })
        ));
        assert_eq!(IndependentCascade::new(0.5, 0), Err(DiffusionError::ZeroRounds));
        assert_eq!(
            independent_cascade(&g, &"Z".to_string(), 0.5, 20, &mut rng),
            Err(DiffusionError::NodeNotFound("Z".to_string()))
        );
    }

    #[test]
    fn test_cycle_does_not_revisit() {
        let g = fixtures::cycle(5);
        let mut rng = seeded(9);
        let out = independent_cascade(&g, &"n0".to_string(), 1.0, 20, &mut rng).unwrap();

        assert_eq!(out.activated_count(), 5);
        assert_eq!(out.round_count(), 5);
    }
}
