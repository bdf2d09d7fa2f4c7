//! Error types for analysis operations.

use std::path::PathBuf;
use thiserror::Error;

use cascade_core::DiffusionError;

use crate::config::ConfigError;

/// Errors raised while running or persisting an analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("diffusion error: {0}")]
    Diffusion(#[from] DiffusionError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("could not read graph {path:?}: {source}")]
    GraphFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid graph description: {0}")]
    GraphFormat(#[from] serde_json::Error),
}

/// Errors writing result files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
