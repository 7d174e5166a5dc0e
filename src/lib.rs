//! # lineage_db
//!
//! A relational tree store for ancestry genealogies.
//!
//! lineage_db holds one rooted tree — binary or multi-child — in the
//! left-child/right-sibling encoding, persists it as two SQL relations,
//! and answers ancestor/descendant questions either by in-memory traversal
//! or by a recursive relational query.
//!
//! ## Core Concepts
//!
//! - **Nodes**: immutable records with a leaf flag, a rank, and the two
//!   encoding pointers; the unique maximum rank in a tree marks its root
//! - **Edges**: one record per parent→child relation, in discovery order
//! - **Sources**: producers of the raw topology arrays (a simulator, a
//!   seeded synthetic generator, or a fixed fixture)
//! - **Stores**: [TreeStore] is built once from a source and read-only
//!   afterwards; [SqlStore] saves and loads it through SQLite
//!
//! ## Example
//!
//! ```ignore
//! use lineage_db::{DescendantFilter, SyntheticSource, TreeStore};
//!
//! let store = TreeStore::from_source(&SyntheticSource::new(10, 42))?;
//! let root = store.root()?;
//! for leaf in store.descendants(root.id, DescendantFilter::LeavesOnly)? {
//!     println!("{}", leaf.id);
//! }
//! ```

pub mod db;
pub mod model;
pub mod source;
pub mod tree;

mod error;

pub use db::SqlStore;
pub use error::{Error, Result};
pub use model::{Edge, EdgeId, Node, NodeId};
pub use source::{SyntheticSource, Topology, TreeSource};
pub use tree::{Children, DescendantFilter, Descendants, TreeStore};
