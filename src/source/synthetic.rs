//! Synthetic tree source for testing and benchmarks

use super::{Topology, TreeSource};
use crate::model::NodeId;
use crate::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A deterministic random genealogy generator
///
/// Builds a binary tree over `num_leaves` sample nodes the way a coalescent
/// simulation does: surviving lineages are merged pairwise, each merge
/// creating a fresh internal node, until a single lineage (the root) remains.
/// Leaves get ids `0..n`, internal nodes `n..2n-1`, the root is `2n-2`.
///
/// The generator is deterministic: same seed → same topology.
pub struct SyntheticSource {
    num_leaves: u32,
    seed: u64,
    description: String,
}

impl SyntheticSource {
    /// Create a source producing a genealogy over `num_leaves` samples
    pub fn new(num_leaves: u32, seed: u64) -> Self {
        SyntheticSource {
            num_leaves,
            seed,
            description: format!("synthetic genealogy ({} leaves, seed {})", num_leaves, seed),
        }
    }
}

impl TreeSource for SyntheticSource {
    fn topology(&self) -> Result<Topology> {
        let n = self.num_leaves as usize;
        if n < 2 {
            return Err(Error::InvalidTree(format!(
                "a genealogy needs at least 2 leaves, got {}",
                n
            )));
        }

        let total = 2 * n - 1;
        let mut left_child: Vec<Option<NodeId>> = vec![None; total];
        let mut right_sib: Vec<Option<NodeId>> = vec![None; total];

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        // Surviving lineages, by subtree root id
        let mut active: Vec<u32> = (0..self.num_leaves).collect();
        let mut next_id = self.num_leaves;

        while active.len() > 1 {
            let first = active.swap_remove(rng.gen_range(0..active.len()));
            let second = active.swap_remove(rng.gen_range(0..active.len()));

            left_child[next_id as usize] = Some(NodeId(first));
            right_sib[first as usize] = Some(NodeId(second));

            active.push(next_id);
            next_id += 1;
        }

        Ok(Topology {
            left_child,
            right_sib,
            root: NodeId(next_id - 1),
        })
    }

    fn describe(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_topology() {
        let a = SyntheticSource::new(10, 42).topology().unwrap();
        let b = SyntheticSource::new(10, 42).topology().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_id_layout() {
        let topo = SyntheticSource::new(10, 7).topology().unwrap();

        assert_eq!(topo.len(), 19);
        assert_eq!(topo.root, NodeId(18));

        // Leaves have no children, internal nodes always do
        for id in 0..10 {
            assert!(topo.left_child[id].is_none());
        }
        for id in 10..19 {
            assert!(topo.left_child[id].is_some());
        }
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        assert!(SyntheticSource::new(0, 1).topology().is_err());
        assert!(SyntheticSource::new(1, 1).topology().is_err());
    }

    #[test]
    fn test_smallest_genealogy() {
        let topo = SyntheticSource::new(2, 3).topology().unwrap();
        assert_eq!(topo.len(), 3);
        assert_eq!(topo.root, NodeId(2));
        assert_eq!(topo.left_child[2].map(|id| id.index() < 2), Some(true));
    }
}
