//! Error types for lineage_db

use crate::model::NodeId;
use thiserror::Error;

/// Result type alias for lineage_db operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lineage_db operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// Malformed or cyclic input during construction or load.
    /// The store is left (or remains) unbuilt.
    #[error("Invalid tree: {0}")]
    InvalidTree(String),

    /// A query was issued before the store was built.
    #[error("Store is not built; construct it from a tree source first")]
    NotBuilt,

    /// The referenced node id has no entry in the store.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
}
