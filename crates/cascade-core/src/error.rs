//! Error types for the diffusion engines.

use thiserror::Error;

/// Errors raised before a simulation run starts.
///
/// A run that has started never fails; truncation at the round bound is
/// reported through the outcome instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiffusionError {
    /// A probability or threshold outside [0, 1] (NaN included)
    #[error("invalid parameter {name}: {value} is outside [0, 1]")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A round bound of zero
    #[error("max_rounds must be at least 1")]
    ZeroRounds,

    /// A seed that is not a node of the graph
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// More seeds requested than the graph has nodes
    #[error("cannot select {requested} seeds from {available} nodes")]
    SeedCount { requested: usize, available: usize },
}

impl DiffusionError {
    /// Creates a node-not-found error from any displayable node.
    pub fn node_not_found(node: impl std::fmt::Display) -> Self {
        Self::NodeNotFound(node.to_string())
    }
}

/// Checks that `value` lies in the closed unit interval.
pub(crate) fn check_unit(name: &'static str, value: f64) -> Result<f64, DiffusionError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(DiffusionError::InvalidParameter { name, value })
    }
}
