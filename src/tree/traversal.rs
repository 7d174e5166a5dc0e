//! Traversal queries over a built tree
//!
//! Both queries are lazy iterators over the left-child/right-sibling
//! encoding and never allocate more than an explicit stack.

use super::store::{BuiltTree, TreeStore};
use crate::model::{Node, NodeId};
use crate::Result;

/// Which nodes a descendant traversal yields
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DescendantFilter {
    /// Only leaves (the default)
    #[default]
    LeavesOnly,
    /// Every node encountered, internal nodes included
    All,
}

impl TreeStore {
    /// The children of `id` in left-to-right order
    ///
    /// Follows the node's left_child pointer and then the right_sib chain
    /// until absent; a leaf yields an empty sequence. Side-effect free:
    /// repeated calls on the same store return identical sequences.
    pub fn children(&self, id: impl Into<NodeId>) -> Result<Children<'_>> {
        let tree = self.built()?;
        let node = tree.get(id.into())?;
        Ok(Children {
            tree,
            next: node.left_child,
        })
    }

    /// The descendants of `id` in first-encounter (preorder) order
    ///
    /// Expands left_child and right_sib links from `id` downward. The start
    /// node's own right_sib link is never followed: siblings of `id` and
    /// their subtrees are reachable above `id`, not below it. The start node
    /// itself is yielded when it matches the filter.
    pub fn descendants(
        &self,
        id: impl Into<NodeId>,
        filter: DescendantFilter,
    ) -> Result<Descendants<'_>> {
        let tree = self.built()?;
        let start = tree.get(id.into())?.id;
        Ok(Descendants {
            tree,
            start,
            stack: vec![start],
            filter,
        })
    }
}

/// Ordered iterator over one node's children
pub struct Children<'a> {
    tree: &'a BuiltTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let id = self.next?;
        let node = self.tree.nodes.get(id.index())?.as_ref()?;
        self.next = node.right_sib;
        Some(node)
    }
}

/// Lazy preorder iterator over one node's descendants
pub struct Descendants<'a> {
    tree: &'a BuiltTree,
    start: NodeId,
    stack: Vec<NodeId>,
    filter: DescendantFilter,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        while let Some(id) = self.stack.pop() {
            let node = self.tree.nodes.get(id.index())?.as_ref()?;

            // Sibling before child on the stack, so the child pops first.
            // The start node's sibling chain stays above the traversal.
            if id != self.start {
                if let Some(sib) = node.right_sib {
                    self.stack.push(sib);
                }
            }
            if let Some(child) = node.left_child {
                self.stack.push(child);
            }

            match self.filter {
                DescendantFilter::LeavesOnly if !node.is_leaf => continue,
                _ => return Some(node),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::test_fixtures::ten_leaf_topology;
    use crate::Error;

    fn ids<'a>(nodes: impl Iterator<Item = &'a Node>) -> Vec<u32> {
        nodes.map(|n| n.id.0).collect()
    }

    #[test]
    fn test_children_in_chain_order() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();

        assert_eq!(ids(store.children(18u32).unwrap()), vec![16, 17]);
        assert_eq!(ids(store.children(16u32).unwrap()), vec![5, 14]);
        assert_eq!(ids(store.children(13u32).unwrap()), vec![11, 12]);
    }

    #[test]
    fn test_children_of_leaf_is_empty() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();
        assert_eq!(store.children(5u32).unwrap().count(), 0);
    }

    #[test]
    fn test_children_report_their_parent() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();
        for parent in [10u32, 13, 14, 16, 17, 18] {
            for child in store.children(parent).unwrap() {
                assert_eq!(store.parent_of(child.id).unwrap(), Some(NodeId(parent)));
            }
        }
    }

    #[test]
    fn test_children_idempotent() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();
        let first = ids(store.children(14u32).unwrap());
        let second = ids(store.children(14u32).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_descendant_leaves_of_internal_node() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();
        let leaves = ids(store
            .descendants(16u32, DescendantFilter::LeavesOnly)
            .unwrap());
        assert_eq!(leaves, vec![5, 3, 4, 0, 8, 6, 1]);
    }

    #[test]
    fn test_descendants_never_cross_into_the_sibling_subtree() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();

        // Node 16's right sibling 17 subtends leaves 2, 7 and 9; chasing the
        // start node's sibling link would pull them in
        let leaves = ids(store
            .descendants(16u32, DescendantFilter::LeavesOnly)
            .unwrap());
        for outside in [2, 7, 9] {
            assert!(!leaves.contains(&outside));
        }
    }

    #[test]
    fn test_descendants_of_root_cover_all_leaves_once() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();
        let mut leaves = ids(store
            .descendants(18u32, DescendantFilter::LeavesOnly)
            .unwrap());
        leaves.sort_unstable();
        assert_eq!(leaves, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_descendants_all_includes_internal_nodes() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();
        let all = ids(store.descendants(16u32, DescendantFilter::All).unwrap());

        assert_eq!(all.len(), 13);
        assert_eq!(all[0], 16);
        for internal in [14, 10, 13, 11, 12] {
            assert!(all.contains(&internal));
        }
        assert!(!all.contains(&17));
        assert!(!all.contains(&18));
    }

    #[test]
    fn test_descendants_of_leaf_yield_the_leaf() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();
        let leaves = ids(store.descendants(4u32, DescendantFilter::LeavesOnly).unwrap());
        assert_eq!(leaves, vec![4]);
    }

    #[test]
    fn test_default_filter_is_leaves_only() {
        assert_eq!(DescendantFilter::default(), DescendantFilter::LeavesOnly);
    }

    #[test]
    fn test_traversals_require_a_built_store() {
        let store = TreeStore::new();
        assert!(matches!(store.children(0u32), Err(Error::NotBuilt)));
        assert!(matches!(
            store.descendants(0u32, DescendantFilter::default()),
            Err(Error::NotBuilt)
        ));
    }

    #[test]
    fn test_traversals_check_the_start_node() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();
        assert!(matches!(
            store.children(42u32),
            Err(Error::NodeNotFound(NodeId(42)))
        ));
        assert!(matches!(
            store.descendants(42u32, DescendantFilter::default()),
            Err(Error::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_every_node_reachable_from_its_root() {
        let store = TreeStore::from_source(&ten_leaf_topology()).unwrap();
        let root = store.root_of(0u32).unwrap().id;

        for node in store.nodes().unwrap() {
            let found = store
                .descendants(root, DescendantFilter::All)
                .unwrap()
                .any(|n| n.id == node.id);
            assert!(found, "node {} not reachable from root", node.id);
        }
    }
}
