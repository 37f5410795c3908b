//! Directory tree walking logic
//!
//! `TreeWalker` builds the whole hierarchy in memory: a depth-first,
//! pre-order scan that skips hidden entries, lists directories before files
//! (case-insensitively by name within each group), and records permission
//! denial on the affected directory instead of failing the run.
//!
//! `filter_tree` prunes a built or loaded tree to the entries whose names
//! match a search string, keeping their ancestors.

mod config;
mod filter;
mod node;
mod search;
mod utils;
mod walker;

// Re-export public types
pub use config::{HIDDEN_PREFIX, WalkerConfig};
pub use filter::EntryFilter;
pub use node::{NodeKind, PERMISSION_DENIED, TreeNode};
pub use search::{filter_tree, matches_query};
pub use utils::join_relative;
pub use walker::{TreeWalker, build_tree};
