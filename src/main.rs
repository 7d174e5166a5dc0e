//! lineage CLI - Command line interface for lineage_db
//!
//! Builds synthetic genealogies into a SQLite database and answers
//! children/descendant/root queries against it.

use clap::{Parser, Subcommand};
use lineage_db::{DescendantFilter, Node, NodeId, SqlStore, SyntheticSource, TreeSource, TreeStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lineage")]
#[command(about = "A relational tree store for ancestry genealogies")]
#[command(version)]
struct Cli {
    /// Path to the database file
    #[arg(short, long, default_value = "genealogy.db")]
    database: PathBuf,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic genealogy and save it to the database
    Generate {
        /// Number of sample leaves
        #[arg(short, long, default_value = "10")]
        leaves: u32,
        /// Seed for the random genealogy
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    // === Node Commands ===
    /// Get a node by id
    Node {
        /// The node id
        id: u32,
    },

    /// List a node's children in left-to-right order
    Children {
        /// The node id
        id: u32,
    },

    /// List a node's descendants
    Descendants {
        /// The node id
        id: u32,
        /// Include internal nodes, not just leaves
        #[arg(long)]
        all: bool,
        /// Run the recursive SQL query instead of the in-memory traversal
        /// (leaves only in this mode)
        #[arg(long)]
        via_sql: bool,
    },

    /// Get the root of the tree containing a node
    Root {
        /// The node id
        id: u32,
    },

    /// Show database status
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { leaves, seed } => {
            let source = SyntheticSource::new(leaves, seed);
            let store = TreeStore::from_source(&source)?;
            let mut db = SqlStore::create(&cli.database)?;
            db.save(&store)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "database": cli.database.display().to_string(),
                    "source": source.describe(),
                    "nodes": store.num_nodes()?,
                    "leaves": store.num_leaves()?,
                    "edges": store.edges()?.len(),
                    "root": store.root()?.id.0
                }),
            );
        }

        Commands::Node { id } => {
            let db = SqlStore::open(&cli.database)?;
            match db.node(id) {
                Ok(node) => output(&cli.format, &node_json(&node)),
                Err(lineage_db::Error::NodeNotFound(id)) => {
                    not_found(&cli.format, id);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Children { id } => {
            let store = SqlStore::open(&cli.database)?.load()?;
            match store.children(id) {
                Ok(children) => {
                    let items: Vec<_> = children.map(node_json).collect();
                    output(
                        &cli.format,
                        &serde_json::json!({
                            "id": id,
                            "count": items.len(),
                            "children": items
                        }),
                    );
                }
                Err(lineage_db::Error::NodeNotFound(id)) => {
                    not_found(&cli.format, id);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Descendants { id, all, via_sql } => {
            let db = SqlStore::open(&cli.database)?;
            let result = if via_sql {
                db.descendant_leaves(id).map(|leaves| {
                    serde_json::json!({
                        "id": id,
                        "count": leaves.len(),
                        "leaves": leaves.iter().map(|l| l.0).collect::<Vec<_>>()
                    })
                })
            } else {
                let filter = if all {
                    DescendantFilter::All
                } else {
                    DescendantFilter::LeavesOnly
                };
                db.load().and_then(|store| {
                    let items: Vec<_> = store.descendants(id, filter)?.map(node_json).collect();
                    Ok(serde_json::json!({
                        "id": id,
                        "count": items.len(),
                        "descendants": items
                    }))
                })
            };
            match result {
                Ok(value) => output(&cli.format, &value),
                Err(lineage_db::Error::NodeNotFound(id)) => {
                    not_found(&cli.format, id);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Root { id } => {
            let store = SqlStore::open(&cli.database)?.load()?;
            match store.root_of(id) {
                Ok(root) => output(&cli.format, &node_json(root)),
                Err(lineage_db::Error::NodeNotFound(id)) => {
                    not_found(&cli.format, id);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Status => {
            let store = SqlStore::open(&cli.database)?.load()?;
            output(
                &cli.format,
                &serde_json::json!({
                    "database": cli.database.display().to_string(),
                    "nodes": store.num_nodes()?,
                    "leaves": store.num_leaves()?,
                    "edges": store.edges()?.len(),
                    "root": store.root()?.id.0
                }),
            );
        }
    }

    Ok(())
}

fn node_json(node: &Node) -> serde_json::Value {
    serde_json::json!({
        "id": node.id.0,
        "is_leaf": node.is_leaf,
        "rank": node.rank,
        "left_child": node.left_child.map(|id| id.0),
        "right_sib": node.right_sib.map(|id| id.0)
    })
}

fn not_found(format: &OutputFormat, id: NodeId) -> ! {
    output(
        format,
        &serde_json::json!({
            "status": "error",
            "message": format!("Node not found: {}", id)
        }),
    );
    std::process::exit(1);
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
