//! Edge type - one parent→child relation

use super::NodeId;
use serde::{Deserialize, Serialize};

/// Unique identifier for an edge
///
/// Edges are numbered in discovery order during construction, so the edge
/// table doubles as a record of the traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// Create a new edge ID
    pub fn new(id: u32) -> Self {
        EdgeId(id)
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EdgeId {
    fn from(id: u32) -> Self {
        EdgeId(id)
    }
}

/// A directed edge from a parent node to one of its children
///
/// Edge existence implies the child's parent is the edge's parent; the store
/// keeps the edge set and the left-child/right-sibling pointers consistent
/// with each other at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique id, assigned in discovery order
    pub id: EdgeId,

    /// Parent node
    pub parent: NodeId,

    /// Child node
    pub child: NodeId,
}

impl Edge {
    /// Create a new edge
    pub fn new(id: impl Into<EdgeId>, parent: impl Into<NodeId>, child: impl Into<NodeId>) -> Self {
        Edge {
            id: id.into(),
            parent: parent.into(),
            child: child.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_creation() {
        let edge = Edge::new(0u32, 18u32, 16u32);
        assert_eq!(edge.id, EdgeId(0));
        assert_eq!(edge.parent, NodeId(18));
        assert_eq!(edge.child, NodeId(16));
    }
}
