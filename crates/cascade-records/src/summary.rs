//! Summary rows for per-node and structural reports.

use serde::{Deserialize, Serialize};

use crate::record::JsonLine;

/// Per-node row of a Linear Threshold run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub node: String,
    pub degree: usize,
    /// Threshold rounded to three decimal places
    pub threshold: f64,
    pub activated: bool,
    /// Round at which the node activated, absent if it never did
    pub activation_step: Option<usize>,
}

/// Structural influencer row: degree and betweenness of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerRow {
    pub node: String,
    pub degree: usize,
    pub betweenness: f64,
}

/// Structural position of a seed next to its observed IC spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureDiffusionRow {
    pub node: String,
    pub degree: usize,
    pub betweenness: f64,
    pub influence_ic: usize,
}

impl JsonLine for NodeSummary {}
impl JsonLine for InfluencerRow {}
impl JsonLine for StructureDiffusionRow {}
