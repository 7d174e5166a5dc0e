//! Node type - one vertex of an ancestry tree

use serde::{Deserialize, Serialize};

/// Unique identifier for a node
///
/// Ids are dense non-negative integers: a tree source declares an id range
/// `0..len` and every node falls inside it. This makes arena-style indexed
/// storage possible without any id remapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// The id as a usize, for indexing into arena tables
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        *id
    }
}

/// A node in an ancestry tree
///
/// Nodes use the left-child/right-sibling encoding: two optional pointers
/// represent children lists of any arity. A node is a leaf exactly when it
/// has no left child.
///
/// Nodes are created once during construction and never mutated; every field
/// is plain data and the record is freely copyable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique id, inside the declared id range
    pub id: NodeId,

    /// Whether this node has no children
    pub is_leaf: bool,

    /// Rank: strictly less than the parent's rank; the unique maximum
    /// in a tree marks its root
    pub rank: i32,

    /// Left-most child, absent for leaves
    pub left_child: Option<NodeId>,

    /// Immediate right sibling, absent for a right-most child and the root
    pub right_sib: Option<NodeId>,
}

impl Node {
    /// Create a node record
    ///
    /// `is_leaf` is derived from `left_child`: a node is a leaf iff it has
    /// no left child.
    pub fn new(
        id: impl Into<NodeId>,
        rank: i32,
        left_child: Option<NodeId>,
        right_sib: Option<NodeId>,
    ) -> Self {
        Node {
            id: id.into(),
            is_leaf: left_child.is_none(),
            rank,
            left_child,
            right_sib,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_flag_follows_left_child() {
        let leaf = Node::new(3, 0, None, Some(NodeId(4)));
        assert!(leaf.is_leaf);

        let internal = Node::new(10, 1, Some(NodeId(3)), None);
        assert!(!internal.is_leaf);
    }

    #[test]
    fn test_node_id_display_and_index() {
        let id = NodeId::new(16);
        assert_eq!(id.to_string(), "16");
        assert_eq!(id.index(), 16);
        assert_eq!(NodeId::from(16u32), id);
    }
}
