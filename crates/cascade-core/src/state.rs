//! Activation State
//!
//! What a single engine run produces: the active set, the round each node
//! first became active, and the per-round trace.

use std::collections::{BTreeMap, BTreeSet};

/// Ordered sequence of newly activated node sets, one per round.
///
/// Round 0 is the seed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace<N> {
    rounds: Vec<BTreeSet<N>>,
}

impl<N: Clone + Ord> StepTrace<N> {
    fn new(seeds: BTreeSet<N>) -> Self {
        Self { rounds: vec![seeds] }
    }

    /// All rounds, round 0 first.
    pub fn rounds(&self) -> &[BTreeSet<N>] {
        &self.rounds
    }

    /// Number of rounds recorded, round 0 included.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// A trace always holds at least round 0, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Nodes activated in the given round.
    pub fn round(&self, round: usize) -> Option<&BTreeSet<N>> {
        self.rounds.get(round)
    }

    /// Cumulative active set as of the end of `round`.
    ///
    /// Rounds past the end of the trace return the final active set.
    pub fn active_through(&self, round: usize) -> BTreeSet<N> {
        self.rounds
            .iter()
            .take(round.saturating_add(1))
            .flat_map(|r| r.iter().cloned())
            .collect()
    }

    /// Rounds as sorted vectors, convenient for comparisons and output.
    pub fn to_vecs(&self) -> Vec<Vec<N>> {
        self.rounds.iter().map(|r| r.iter().cloned().collect()).collect()
    }
}

/// Activation state of one run.
///
/// The active set only grows, and a node is assigned an activation step
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cascade<N> {
    activated: BTreeSet<N>,
    activation_step: BTreeMap<N, usize>,
    trace: StepTrace<N>,
}

impl<N: Clone + Ord> Cascade<N> {
    /// Starts a run from the given seeds, all at step 0.
    pub fn seeded(seeds: BTreeSet<N>) -> Self {
        let activation_step = seeds.iter().map(|s| (s.clone(), 0)).collect();
        Self {
            activated: seeds.clone(),
            activation_step,
            trace: StepTrace::new(seeds),
        }
    }

    pub fn is_active(&self, node: &N) -> bool {
        self.activated.contains(node)
    }

    /// Records a round of newly activated nodes and returns its index.
    ///
    /// Nodes that are already active are dropped from the delta.
    pub(crate) fn record_round(&mut self, newly: BTreeSet<N>) -> usize {
        let round = self.trace.rounds.len();
        let delta: BTreeSet<N> = newly
            .into_iter()
            .filter(|n| !self.activated.contains(n))
            .collect();

        for node in &delta {
            self.activated.insert(node.clone());
            self.activation_step.insert(node.clone(), round);
        }
        self.trace.rounds.push(delta);
        round
    }

    pub fn activated(&self) -> &BTreeSet<N> {
        &self.activated
    }

    pub fn activated_count(&self) -> usize {
        self.activated.len()
    }

    /// Round at which `node` first became active.
    pub fn activation_step(&self, node: &N) -> Option<usize> {
        self.activation_step.get(node).copied()
    }

    pub fn activation_steps(&self) -> &BTreeMap<N, usize> {
        &self.activation_step
    }

    pub fn trace(&self) -> &StepTrace<N> {
        &self.trace
    }

    /// Number of rounds in the trace, round 0 included.
    pub fn round_count(&self) -> usize {
        self.trace.len()
    }
}
