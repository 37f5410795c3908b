//! Tree serialization and display
//!
//! The tree is persisted as a single JSON document whose objects carry
//! `name`, `type`, `path`, and, when present, `children` and `error`.
//! A saved document can be loaded back and rendered as a console tree.
//!
//! # Module Structure
//!
//! - `json` - JSON document writing and loading
//! - `tree` - Console tree formatter

mod json;
mod tree;

pub use json::{print_json, read_json, to_json_string, write_json};
pub use tree::TreeFormatter;
