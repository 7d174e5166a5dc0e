//! SQL text and row converters
//!
//! Every statement lives here as a named constant so the relational shape
//! of the store can be read in one place.

use crate::model::{Edge, EdgeId, Node, NodeId};

/// The two relations of the persisted representation.
pub(crate) const CREATE_SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS nodes (
    id          INTEGER PRIMARY KEY,
    is_leaf     BOOLEAN NOT NULL,
    rank        INTEGER NOT NULL,
    left_child  INTEGER NULL,
    right_sib   INTEGER NULL
);

CREATE TABLE IF NOT EXISTS edges (
    id      INTEGER PRIMARY KEY,
    parent  INTEGER NOT NULL,
    child   INTEGER NOT NULL,
    FOREIGN KEY(parent) REFERENCES nodes(id),
    FOREIGN KEY(child)  REFERENCES nodes(id)
);";

pub(crate) const CLEAR_SQL: &str = "\
DELETE FROM edges;
DELETE FROM nodes;";

pub(crate) const INSERT_NODE_SQL: &str =
    "INSERT INTO nodes (id, is_leaf, rank, left_child, right_sib) VALUES (?1, ?2, ?3, ?4, ?5)";

pub(crate) const INSERT_EDGE_SQL: &str =
    "INSERT INTO edges (id, parent, child) VALUES (?1, ?2, ?3)";

pub(crate) const SELECT_NODE_SQL: &str =
    "SELECT id, is_leaf, rank, left_child, right_sib FROM nodes WHERE id = ?1";

pub(crate) const SELECT_ALL_NODES_SQL: &str =
    "SELECT id, is_leaf, rank, left_child, right_sib FROM nodes ORDER BY id ASC";

pub(crate) const SELECT_ALL_EDGES_SQL: &str =
    "SELECT id, parent, child FROM edges ORDER BY id ASC";

/// Recursive descendant-leaf query.
///
/// Expands left-child and sibling links row by row. The `p.id != ?1`
/// condition keeps the walk from re-ascending through the starting node's
/// own sibling chain: without it, the query would also return the leaves
/// under the start node's right sibling.
pub(crate) const DESCENDANT_LEAVES_SQL: &str = "\
WITH RECURSIVE walk(id) AS (
    -- Base: the starting node
    SELECT id FROM nodes WHERE id = ?1

    UNION

    -- Recursive: follow left-child and sibling links downward
    SELECT t.id
    FROM walk w
    JOIN nodes p ON p.id = w.id
    JOIN nodes t ON t.id = p.left_child
                 OR (t.id = p.right_sib AND p.id != ?1)
)
SELECT n.id
FROM walk w
JOIN nodes n ON n.id = w.id
WHERE n.left_child IS NULL
ORDER BY n.id ASC";

pub(crate) fn row_to_node(row: &rusqlite::Row<'_>) -> rusqlite::Result<Node> {
    let id: u32 = row.get(0)?;
    let is_leaf: bool = row.get(1)?;
    let rank: i32 = row.get(2)?;
    let left_child: Option<u32> = row.get(3)?;
    let right_sib: Option<u32> = row.get(4)?;

    Ok(Node {
        id: NodeId(id),
        is_leaf,
        rank,
        left_child: left_child.map(NodeId),
        right_sib: right_sib.map(NodeId),
    })
}

pub(crate) fn row_to_edge(row: &rusqlite::Row<'_>) -> rusqlite::Result<Edge> {
    let id: u32 = row.get(0)?;
    let parent: u32 = row.get(1)?;
    let child: u32 = row.get(2)?;

    Ok(Edge {
        id: EdgeId(id),
        parent: NodeId(parent),
        child: NodeId(child),
    })
}
