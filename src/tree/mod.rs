//! In-memory tree store and traversal queries

mod store;
mod traversal;

pub use store::TreeStore;
pub use traversal::{Children, DescendantFilter, Descendants};
