//! JSON output formatting

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::TreeNode;

/// Render a tree as pretty-printed JSON with a two-space indent.
/// Non-ASCII names are written literally.
pub fn to_json_string(node: &TreeNode) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Write a tree to `path`, replacing any existing file.
pub fn write_json(node: &TreeNode, path: &Path) -> Result<()> {
    debug!(path = %path.display(), "writing structure");

    let file = File::create(path).map_err(|e| Error::write(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, node).map_err(|e| Error::write(path, e.into()))?;
    writer.flush().map_err(|e| Error::write(path, e))
}

/// Load a structure document previously written by `write_json`.
pub fn read_json(path: &Path) -> Result<TreeNode> {
    debug!(path = %path.display(), "reading structure");

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::read(path, e),
    })?;
    let node: TreeNode =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(node.normalized())
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    let json = serde_json::to_string_pretty(node).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
