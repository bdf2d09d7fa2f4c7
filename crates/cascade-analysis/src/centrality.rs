//! Structural centrality measures.

use std::collections::{BTreeMap, VecDeque};

use cascade_core::InfluenceGraph;

/// Normalized betweenness centrality (Brandes, unweighted).
///
/// Shortest paths follow successors, so directed graphs count directed
/// paths. Raw scores are scaled by `1 / ((n - 1)(n - 2))`; graphs with two
/// or fewer nodes score zero everywhere.
pub fn betweenness_centrality<G>(graph: &G) -> BTreeMap<G::Node, f64>
where
    G: InfluenceGraph + ?Sized,
{
    let nodes = graph.nodes();
    let n = nodes.len();
    let index: BTreeMap<&G::Node, usize> = nodes.iter().enumerate().map(|(i, v)| (v, i)).collect();
    let adjacency: Vec<Vec<usize>> = nodes
        .iter()
        .map(|v| {
            graph
                .successors(v)
                .iter()
                .filter_map(|w| index.get(w).copied())
                .collect()
        })
        .collect();

    let mut scores = vec![0.0f64; n];
    for source in 0..n {
        let mut stack = Vec::with_capacity(n);
        let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0f64; n];
        let mut dist: Vec<Option<usize>> = vec![None; n];
        sigma[source] = 1.0;
        dist[source] = Some(0);

        let mut queue = VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            stack.push(v);
            let dv = dist[v].unwrap_or(0);
            for &w in &adjacency[v] {
                if dist[w].is_none() {
                    dist[w] = Some(dv + 1);
                    queue.push_back(w);
                }
                if dist[w] == Some(dv + 1) {
                    sigma[w] += sigma[v];
                    preds[w].push(v);
                }
            }
        }

        let mut delta = vec![0.0f64; n];
        while let Some(w) = stack.pop() {
            for &v in &preds[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != source {
                scores[w] += delta[w];
            }
        }
    }

    let scale = if n > 2 {
        1.0 / ((n - 1) * (n - 2)) as f64
    } else {
        0.0
    };
    nodes
        .into_iter()
        .zip(scores)
        .map(|(v, s)| (v, s * scale))
        .collect()
}
