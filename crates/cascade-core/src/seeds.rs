//! Seed selection strategies.

use rand::seq::index;
use rand::Rng;
use std::cmp::Reverse;

use crate::config::SeedSelection;
use crate::error::DiffusionError;
use crate::graph::InfluenceGraph;

/// Picks `count` distinct seed nodes.
///
/// `MaxDegree` sorts by degree, highest first, keeping `nodes()` order among
/// ties, and consumes no randomness.
pub fn select_seeds<G, R>(
    graph: &G,
    selection: SeedSelection,
    count: usize,
    rng: &mut R,
) -> Result<Vec<G::Node>, DiffusionError>
where
    G: InfluenceGraph + ?Sized,
    R: Rng + ?Sized,
{
    let nodes = graph.nodes();
    if count > nodes.len() {
        return Err(DiffusionError::SeedCount {
            requested: count,
            available: nodes.len(),
        });
    }

    let seeds = match selection {
        SeedSelection::Random => index::sample(rng, nodes.len(), count)
            .into_iter()
            .map(|i| nodes[i].clone())
            .collect(),
        SeedSelection::MaxDegree => {
            let mut ranked: Vec<(usize, G::Node)> =
                nodes.into_iter().map(|n| (graph.degree(&n), n)).collect();
            ranked.sort_by_key(|(degree, _)| Reverse(*degree));
            ranked.into_iter().take(count).map(|(_, n)| n).collect()
        }
    };
    Ok(seeds)
}
