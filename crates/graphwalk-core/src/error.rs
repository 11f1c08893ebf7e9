//! Error types for graphwalk-core.

use thiserror::Error;

use crate::graph::VertexId;

/// Graph store and configuration errors.
///
/// Every store operation reports failure through this type and leaves the
/// graph untouched when it does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex with this key is already registered.
    #[error("Vertex '{0}' already exists")]
    VertexExists(String),

    /// The handle does not refer to a live vertex (deleted or never issued).
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// No edge links the two vertices.
    #[error("No edge between '{from}' and '{to}'")]
    EdgeNotFound {
        /// Key of the first endpoint.
        from: String,
        /// Key of the second endpoint.
        to: String,
    },

    /// The edge is recorded in only one of the two neighbour lists.
    #[error("Edge between '{from}' and '{to}' is only recorded on one side")]
    InconsistentEdge {
        /// Key of the first endpoint.
        from: String,
        /// Key of the second endpoint.
        to: String,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graphwalk operations.
pub type Result<T> = std::result::Result<T, Error>;
