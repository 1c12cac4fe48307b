//! Unified error handling for the live session adapter.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the live session adapter.
#[derive(Debug, Error)]
pub enum LiveError {
    /// Rendering a template failed.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The live client's outbound channel has been closed.
    #[error("live client closed")]
    ClientClosed,

    /// Settings could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
