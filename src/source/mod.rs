//! Tree sources - producers of the topology the store is built from

mod synthetic;
mod traits;

pub use synthetic::SyntheticSource;
pub use traits::{Topology, TreeSource};
