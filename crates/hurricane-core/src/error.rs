//! Error types for hurricane-core.

use thiserror::Error;

/// Errors raised by the spiral graph and its configuration layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node with this identifier is already present in the graph.
    ///
    /// Insertion is rejected without touching the graph, so the caller may
    /// retry with another identifier.
    #[error("node {0:?} already exists")]
    DuplicateIdentifier(String),

    /// Configuration values are well-formed but semantically unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be extracted (malformed TOML, wrong types).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
