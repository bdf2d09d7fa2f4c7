//! Graph files.
//!
//! Graphs are read from JSON of the form
//! `{"directed": true, "nodes": ["a"], "edges": [["a", "b"]]}`. Nodes that
//! appear only in `edges` are added implicitly.

use std::path::Path;
use tracing::info;

use cascade_core::{AdjacencyGraph, InfluenceGraph};

use crate::error::AnalysisError;

/// Reads a graph description from `path`.
pub fn load_graph(path: &Path) -> Result<AdjacencyGraph<String>, AnalysisError> {
    let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::GraphFile {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(&content)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "graph loaded"
    );
    Ok(graph)
}

/// Parses a graph description from a JSON string.
pub fn parse_graph(content: &str) -> Result<AdjacencyGraph<String>, AnalysisError> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_graph() {
        let g = parse_graph(r#"{"directed": false, "nodes": ["x"], "edges": [["a", "b"]]}"#).unwrap();
        assert!(!g.is_directed());
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert!(g.contains(&"x".to_string()));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_graph(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AnalysisError::GraphFile { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"edges\": 3}}").unwrap();
        assert!(matches!(load_graph(file.path()), Err(AnalysisError::GraphFormat(_))));
    }
}
