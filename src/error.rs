//! Error types for loading trees and configuration.

use thiserror::Error;

/// Failures at the edges of the crate; the table of contents pass itself is total.
#[derive(Error, Debug)]
pub enum TocError {
    /// Reading an input file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The section tree was not valid JSON for a node or node list.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The input parsed, but is not a node or a list of nodes.
    #[error("Invalid section tree: {0}")]
    InvalidTree(String),

    /// The search term could not be compiled.
    #[error("Invalid search term: {0}")]
    Search(#[from] regex::Error),
}
