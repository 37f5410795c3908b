//! dirjson - dump a directory hierarchy as a JSON document

pub mod error;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{TreeFormatter, print_json, read_json, to_json_string, write_json};
pub use stats::{SectionStats, TreeStats, overview, print_overview, print_stats, summarize};
pub use tree::{NodeKind, TreeNode, TreeWalker, WalkerConfig, build_tree, filter_tree};
