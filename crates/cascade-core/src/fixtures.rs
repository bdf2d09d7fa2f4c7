//! Small fixture graphs for tests.
//!
//! Enable the `test-fixtures` feature to use these from other crates:
//!
//! ```ignore
//! // [dev-dependencies]
//! // cascade-core = { path = "../cascade-core", features = ["test-fixtures"] }
//!
//! use cascade_core::fixtures;
//!
//! let g = fixtures::diamond();
//! ```

use crate::graph::AdjacencyGraph;

fn edge(u: &str, v: &str) -> (String, String) {
    (u.to_string(), v.to_string())
}

fn numbered(i: usize) -> String {
    format!("n{}", i)
}

/// Directed diamond: A->B, A->C, B->D, C->D.
pub fn diamond() -> AdjacencyGraph<String> {
    AdjacencyGraph::from_edges(
        true,
        [edge("A", "B"), edge("A", "C"), edge("B", "D"), edge("C", "D")],
    )
}

/// Directed path n0 -> n1 -> ... -> n(len-1).
pub fn path(len: usize) -> AdjacencyGraph<String> {
    let mut g = AdjacencyGraph::directed();
    if len > 0 {
        g.add_node(numbered(0));
    }
    for i in 1..len {
        g.add_edge(numbered(i - 1), numbered(i));
    }
    g
}

/// Directed cycle n0 -> n1 -> ... -> n(len-1) -> n0.
pub fn cycle(len: usize) -> AdjacencyGraph<String> {
    let mut g = path(len);
    if len > 1 {
        g.add_edge(numbered(len - 1), numbered(0));
    }
    g
}

/// Undirected star: `hub` connected to n0..n(leaves-1).
pub fn star(leaves: usize) -> AdjacencyGraph<String> {
    let mut g = AdjacencyGraph::undirected();
    g.add_node("hub".to_string());
    for i in 0..leaves {
        g.add_edge("hub".to_string(), numbered(i));
    }
    g
}

/// `count` nodes and no edges.
pub fn isolated(count: usize) -> AdjacencyGraph<String> {
    let mut g = AdjacencyGraph::directed();
    for i in 0..count {
        g.add_node(numbered(i));
    }
    g
}
