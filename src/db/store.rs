//! SQLite-backed store for built trees
//!
//! Persists the two relations, `nodes` and `edges`, and serves the
//! recursive descendant query directly from SQL. Loading re-runs the same
//! validating construction the in-memory store uses, so a database that was
//! edited out from under us is rejected rather than trusted.

use crate::db::sql;
use crate::model::NodeId;
use crate::source::Topology;
use crate::tree::TreeStore;
use crate::{Error, Result};
use rusqlite::{params, Connection};
use std::collections::HashSet;
use std::path::Path;

/// A tree database backed by a single SQLite file
pub struct SqlStore {
    conn: Connection,
}

impl SqlStore {
    /// Create a new database file (or open an existing one), ensuring the
    /// schema exists
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(sql::CREATE_SCHEMA_SQL)?;
        Ok(SqlStore { conn })
    }

    /// Open an existing database file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no database at {}", path.display()),
            )));
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(sql::CREATE_SCHEMA_SQL)?;
        Ok(SqlStore { conn })
    }

    /// Open an in-memory database, mainly for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(sql::CREATE_SCHEMA_SQL)?;
        Ok(SqlStore { conn })
    }

    // === Persistence ===

    /// Save a built store, replacing any previously saved tree
    ///
    /// Refuses an unbuilt store with [crate::Error::NotBuilt]. All rows go
    /// in a single transaction.
    pub fn save(&mut self, store: &TreeStore) -> Result<()> {
        if !store.is_built() {
            return Err(Error::NotBuilt);
        }

        let tx = self.conn.transaction()?;
        tx.execute_batch(sql::CLEAR_SQL)?;
        {
            let mut insert_node = tx.prepare_cached(sql::INSERT_NODE_SQL)?;
            for node in store.nodes()? {
                insert_node.execute(params![
                    node.id.0,
                    node.is_leaf,
                    node.rank,
                    node.left_child.map(|id| id.0),
                    node.right_sib.map(|id| id.0),
                ])?;
            }

            let mut insert_edge = tx.prepare_cached(sql::INSERT_EDGE_SQL)?;
            for edge in store.edges()? {
                insert_edge.execute(params![edge.id.0, edge.parent.0, edge.child.0])?;
            }
        }
        tx.commit()?;

        Ok(())
    }

    /// Load the saved tree into an in-memory store
    ///
    /// The node rows are re-run through the validating construction and the
    /// result is cross-checked against the saved rows, so inconsistent
    /// contents fail with [crate::Error::InvalidTree] instead of producing
    /// a store that silently violates the tree invariants.
    pub fn load(&self) -> Result<TreeStore> {
        let mut node_stmt = self.conn.prepare_cached(sql::SELECT_ALL_NODES_SQL)?;
        let saved_nodes = node_stmt
            .query_map([], sql::row_to_node)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut edge_stmt = self.conn.prepare_cached(sql::SELECT_ALL_EDGES_SQL)?;
        let saved_edges = edge_stmt
            .query_map([], sql::row_to_edge)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        if saved_nodes.is_empty() {
            return Err(Error::InvalidTree("database holds no nodes".into()));
        }

        // The root is the one node that never appears as a child
        let child_ids: HashSet<NodeId> = saved_edges.iter().map(|e| e.child).collect();
        let mut roots = saved_nodes
            .iter()
            .filter(|n| !child_ids.contains(&n.id))
            .map(|n| n.id);
        let root = roots
            .next()
            .ok_or_else(|| Error::InvalidTree("every node has a parent edge".into()))?;
        if let Some(second) = roots.next() {
            return Err(Error::InvalidTree(format!(
                "more than one root ({} and {})",
                root, second
            )));
        }

        // Rebuild through the validating construction
        let range = saved_nodes.iter().map(|n| n.id.index()).max().unwrap_or(0) + 1;
        let mut left_child = vec![None; range];
        let mut right_sib = vec![None; range];
        for node in &saved_nodes {
            left_child[node.id.index()] = node.left_child;
            right_sib[node.id.index()] = node.right_sib;
        }
        let store = TreeStore::from_source(&Topology {
            left_child,
            right_sib,
            root,
        })?;

        // Cross-check: the rebuilt records must match the saved rows
        if store.num_nodes()? != saved_nodes.len() {
            return Err(Error::InvalidTree(format!(
                "{} of {} node rows are reachable from root {}",
                store.num_nodes()?,
                saved_nodes.len(),
                root
            )));
        }
        for saved in &saved_nodes {
            let rebuilt = store.node(saved.id)?;
            if rebuilt != saved {
                return Err(Error::InvalidTree(format!(
                    "node row {} is inconsistent with the child links",
                    saved.id
                )));
            }
        }
        let saved_pairs: HashSet<(NodeId, NodeId)> =
            saved_edges.iter().map(|e| (e.parent, e.child)).collect();
        let rebuilt_pairs: HashSet<(NodeId, NodeId)> = store
            .edges()?
            .iter()
            .map(|e| (e.parent, e.child))
            .collect();
        if saved_pairs != rebuilt_pairs {
            return Err(Error::InvalidTree(
                "edge rows are inconsistent with the child links".into(),
            ));
        }

        Ok(store)
    }

    // === Queries ===

    /// Fetch one node row
    pub fn node(&self, id: impl Into<NodeId>) -> Result<crate::model::Node> {
        let id = id.into();
        match self
            .conn
            .query_row(sql::SELECT_NODE_SQL, params![id.0], sql::row_to_node)
        {
            Ok(node) => Ok(node),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::NodeNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Descendant leaves of `id`, computed by the recursive query
    ///
    /// Result-set equivalent to the in-memory
    /// `descendants(id, LeavesOnly)`; rows come back ordered by id rather
    /// than in traversal order.
    pub fn descendant_leaves(&self, id: impl Into<NodeId>) -> Result<Vec<NodeId>> {
        let id = id.into();
        // Existence check first: the walk seeded with a missing id would
        // silently return an empty set
        self.node(id)?;

        let mut stmt = self.conn.prepare_cached(sql::DESCENDANT_LEAVES_SQL)?;
        let rows = stmt.query_map(params![id.0], |row| row.get::<_, u32>(0))?;
        let mut leaves = Vec::new();
        for row in rows {
            leaves.push(NodeId(row?));
        }
        Ok(leaves)
    }
}
