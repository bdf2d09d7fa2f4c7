//! Diffusion simulation engine: Independent Cascade and Linear Threshold.
//!
//! The engines read an [`InfluenceGraph`] and never mutate it. All randomness
//! comes from an explicitly passed generator, so a fixed seed reproduces a
//! run exactly.
//!
//! # Modules
//!
//! - [`graph`]: the graph capability trait and an adjacency-list graph
//! - [`state`]: activation state and per-round traces
//! - [`ic`]: the Independent Cascade engine
//! - [`lt`]: the Linear Threshold engine
//! - [`config`]: named configuration options
//! - [`seeds`]: seed selection strategies
//! - [`rng`]: seedable generator helpers

pub mod config;
pub mod error;
pub mod graph;
pub mod ic;
pub mod lt;
pub mod rng;
pub mod seeds;
pub mod state;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use config::{ProbabilityMode, SeedSelection, ThresholdMode};
pub use error::DiffusionError;
pub use graph::{AdjacencyGraph, GraphDescription, InfluenceGraph};
pub use ic::{IcOutcome, IndependentCascade, DEFAULT_MAX_ROUNDS};
pub use lt::{LinearThreshold, LtOutcome};
pub use rng::SimRng;
pub use seeds::select_seeds;
pub use state::{Cascade, StepTrace};
