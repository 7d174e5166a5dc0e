//! Tree source trait definition

use crate::model::NodeId;
use crate::Result;

/// The raw left-child/right-sibling arrays a tree is built from
///
/// The array length declares the id range: every node id lives in
/// `0..left_child.len()`. Ids inside the range that are never reached from
/// the root are simply not part of the tree — ancestry tables routinely
/// cover nodes that belong to other trees of the same genealogy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    /// Left-most child per node id, `None` for leaves
    pub left_child: Vec<Option<NodeId>>,

    /// Immediate right sibling per node id, `None` for right-most children
    pub right_sib: Vec<Option<NodeId>>,

    /// The designated root of the tree
    pub root: NodeId,
}

impl Topology {
    /// Number of ids in the declared range
    pub fn len(&self) -> usize {
        self.left_child.len()
    }

    /// Whether the declared range is empty
    pub fn is_empty(&self) -> bool {
        self.left_child.is_empty()
    }
}

/// Trait for producing tree topologies
///
/// Implementations can be:
/// - Simulation output (e.g., a coalescent ancestry simulator)
/// - Synthetic random genealogies for testing and benchmarks
/// - Fixed hand-written fixtures
pub trait TreeSource {
    /// Produce the topology arrays and the designated root
    fn topology(&self) -> Result<Topology>;

    /// Short human-readable description of this source
    fn describe(&self) -> &str;
}

/// A fixed, pre-computed topology usable directly as a source
impl TreeSource for Topology {
    fn topology(&self) -> Result<Topology> {
        Ok(self.clone())
    }

    fn describe(&self) -> &str {
        "fixed topology"
    }
}
