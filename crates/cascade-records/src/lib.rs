//! Shared result records for the influence diffusion simulator.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace, and the
//! shapes defined here are what the reporting side consumes.

pub mod model;
pub mod record;
pub mod summary;

// Re-export model types
pub use model::{DiffusionModel, SweepParameter};

// Re-export record types
pub use record::{JsonLine, ModelParams, ResultRecord, SensitivityRecord, SweepFailure, SweepReport};

// Re-export summary types
pub use summary::{InfluencerRow, NodeSummary, StructureDiffusionRow};

/// Rounds a value to the given number of decimal places.
///
/// Used for the thresholds and centralities that end up in report rows.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
