//! Graph Capability
//!
//! The engines only ever read a graph. [`InfluenceGraph`] is the set of
//! queries they need; [`AdjacencyGraph`] is a small insertion-ordered
//! implementation used by the CLI and by tests.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Read-only view of a directed or undirected graph.
///
/// `nodes()` must return nodes in a stable order: the engines draw random
/// numbers while walking it, and reproducibility depends on that order.
pub trait InfluenceGraph {
    /// Opaque node identifier.
    type Node: Clone + Ord + fmt::Debug + fmt::Display;

    /// All nodes, in a deterministic order.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Whether `node` belongs to the graph.
    fn contains(&self, node: &Self::Node) -> bool;

    /// Out-neighbors of `node`. For undirected graphs, all neighbors.
    fn successors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// In-neighbors of `node`. For undirected graphs, all neighbors.
    fn predecessors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Number of incident edges (in + out for directed graphs).
    fn degree(&self, node: &Self::Node) -> usize;

    fn is_directed(&self) -> bool;

    fn node_count(&self) -> usize {
        self.nodes().len()
    }
}

/// Adjacency-list graph with insertion-ordered nodes.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    directed: bool,
    nodes: Vec<N>,
    index: BTreeMap<N, usize>,
    /// Out-neighbors (all neighbors when undirected)
    out_edges: Vec<Vec<usize>>,
    /// In-neighbors, only maintained for directed graphs
    in_edges: Vec<Vec<usize>>,
}

impl<N: Clone + Ord> AdjacencyGraph<N> {
    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::with_direction(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::with_direction(false)
    }

    fn with_direction(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            index: BTreeMap::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }

    /// Builds a graph from an edge list, adding endpoints as they appear.
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::with_direction(directed);
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds a node if it is not already present and returns its index.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        self.out_edges.push(Vec::new());
        self.in_edges.push(Vec::new());
        idx
    }

    /// Adds an edge, creating missing endpoints. Duplicate edges are ignored.
    pub fn add_edge(&mut self, from: N, to: N) {
        let u = self.add_node(from);
        let v = self.add_node(to);

        if self.out_edges[u].contains(&v) {
            return;
        }
        self.out_edges[u].push(v);
        if self.directed {
            self.in_edges[v].push(u);
        } else if u != v {
            self.out_edges[v].push(u);
        }
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        let total: usize = self.out_edges.iter().map(Vec::len).sum();
        if self.directed {
            total
        } else {
            let loops = self
                .out_edges
                .iter()
                .enumerate()
                .filter(|(i, adj)| adj.contains(i))
                .count();
            (total + loops) / 2
        }
    }

    /// Edges in insertion order of their source node.
    pub fn edges(&self) -> Vec<(N, N)> {
        let mut edges = Vec::new();
        for (u, adj) in self.out_edges.iter().enumerate() {
            for &v in adj {
                if self.directed || u <= v {
                    edges.push((self.nodes[u].clone(), self.nodes[v].clone()));
                }
            }
        }
        edges
    }

    /// Converts the graph into its serializable description.
    pub fn to_description(&self) -> GraphDescription<N> {
        GraphDescription {
            directed: self.directed,
            nodes: self.nodes.clone(),
            edges: self.edges(),
        }
    }

    fn lookup(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    fn resolve(&self, indices: &[usize]) -> Vec<N> {
        indices.iter().map(|&i| self.nodes[i].clone()).collect()
    }
}

impl<N> InfluenceGraph for AdjacencyGraph<N>
where
    N: Clone + Ord + fmt::Debug + fmt::Display,
{
    type Node = N;

    fn nodes(&self) -> Vec<N> {
        self.nodes.clone()
    }

    fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    fn successors(&self, node: &N) -> Vec<N> {
        match self.lookup(node) {
            Some(idx) => self.resolve(&self.out_edges[idx]),
            None => Vec::new(),
        }
    }

    fn predecessors(&self, node: &N) -> Vec<N> {
        match self.lookup(node) {
            Some(idx) if self.directed => self.resolve(&self.in_edges[idx]),
            Some(idx) => self.resolve(&self.out_edges[idx]),
            None => Vec::new(),
        }
    }

    fn degree(&self, node: &N) -> usize {
        match self.lookup(node) {
            Some(idx) if self.directed => self.out_edges[idx].len() + self.in_edges[idx].len(),
            Some(idx) => self.out_edges[idx].len(),
            None => 0,
        }
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Serializable form of an [`AdjacencyGraph`].
///
/// ```json
/// { "directed": true, "nodes": ["a", "b"], "edges": [["a", "b"]] }
/// ```
///
/// Nodes listed in `edges` need not appear in `nodes`; `nodes` exists for
/// isolated vertices and to pin the node order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "N: Serialize", deserialize = "N: Deserialize<'de>"))]
pub struct GraphDescription<N> {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<N>,
    #[serde(default)]
    pub edges: Vec<(N, N)>,
}

fn default_directed() -> bool {
    true
}

impl<N: Clone + Ord> From<GraphDescription<N>> for AdjacencyGraph<N> {
    fn from(desc: GraphDescription<N>) -> Self {
        let mut graph = Self::with_direction(desc.directed);
        for node in desc.nodes {
            graph.add_node(node);
        }
        for (u, v) in desc.edges {
            graph.add_edge(u, v);
        }
        graph
    }
}

impl<N: Clone + Ord + Serialize> Serialize for AdjacencyGraph<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_description().serialize(serializer)
    }
}

impl<'de, N> Deserialize<'de> for AdjacencyGraph<N>
where
    N: Clone + Ord + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        GraphDescription::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_queries() {
        let g = AdjacencyGraph::from_edges(true, [("a", "b"), ("a", "c"), ("c", "b")]);

        assert_eq!(g.nodes(), vec!["a", "b", "c"]);
        assert_eq!(g.successors(&"a"), vec!["b", "c"]);
        assert_eq!(g.predecessors(&"b"), vec!["a", "c"]);
        assert_eq!(g.degree(&"b"), 2);
        assert_eq!(g.degree(&"a"), 2);
        assert_eq!(g.edge_count(), 3);
        assert!(g.contains(&"c"));
        assert!(!g.contains(&"z"));
        assert!(g.successors(&"z").is_empty());
    }

    #[test]
    fn test_undirected_neighbors_are_symmetric() {
        let g = AdjacencyGraph::from_edges(false, [(1, 2), (2, 3)]);

        assert!(!g.is_directed());
        assert_eq!(g.successors(&2), vec![1, 3]);
        assert_eq!(g.predecessors(&2), vec![1, 3]);
        assert_eq!(g.degree(&2), 2);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_duplicate_edges_ignored() {
        let mut g = AdjacencyGraph::directed();
        g.add_edge("a", "b");
        g.add_edge("a", "b");
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(&"a"), 1);
    }

    #[test]
    fn test_json_description() {
        let json = r#"{"directed": true, "nodes": ["lonely"], "edges": [["x", "y"]]}"#;
        let g: AdjacencyGraph<String> = serde_json::from_str(json).unwrap();

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.nodes()[0], "lonely");
        assert_eq!(g.degree(&"lonely".to_string()), 0);

        let back = serde_json::to_value(&g).unwrap();
        assert_eq!(back["edges"][0][0], "x");
    }

    #[test]
    fn test_direction_defaults_to_directed() {
        let g: AdjacencyGraph<String> = serde_json::from_str(r#"{"edges": [["a", "b"]]}"#).unwrap();
        assert!(g.is_directed());
        assert!(g.successors(&"b".to_string()).is_empty());
    }

    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
    struct AccountId(u32);

    #[test]
    fn test_node_type_without_default() {
        let g: AdjacencyGraph<AccountId> =
            serde_json::from_str(r#"{"directed": false, "edges": [[1, 2], [2, 3]]}"#).unwrap();

        assert_eq!(g.edge_count(), 2);
        let desc = g.to_description();
        assert_eq!(desc.nodes, vec![AccountId(1), AccountId(2), AccountId(3)]);
        assert!(!desc.directed);
    }
}
