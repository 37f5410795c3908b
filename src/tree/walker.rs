//! TreeWalker - builds the full tree in memory for JSON output

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

use super::config::WalkerConfig;
use super::filter::EntryFilter;
use super::node::TreeNode;
use super::utils::{SortKey, entry_name, join_relative};

/// A directory entry that survived filtering, with its precomputed sort key.
struct Entry {
    key: SortKey,
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Tree walker that builds the full tree in memory.
///
/// Traversal is depth-first and pre-order. Symlinks are followed like any
/// other entry, so a symlink cycle recurses without bound.
pub struct TreeWalker {
    filter: EntryFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            filter: EntryFilter::new(&config),
        }
    }

    /// Check that `root` exists and report whether it is a directory.
    pub fn check_root(&self, root: &Path) -> Result<bool> {
        match fs::metadata(root) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound {
                path: root.to_path_buf(),
            }),
            Err(e) => Err(Error::read(root, e)),
        }
    }

    /// Build the tree rooted at `root`. The root node always has an empty path.
    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        let is_dir = self.check_root(root)?;
        self.walk_entry(root, entry_name(root), String::new(), is_dir)
    }

    fn walk_entry(
        &self,
        path: &Path,
        name: String,
        rel_path: String,
        is_dir: bool,
    ) -> Result<TreeNode> {
        if !is_dir {
            return Ok(TreeNode::file(name, rel_path));
        }

        debug!(path = %path.display(), "entering directory");

        let entries = match self.read_entries(path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                warn!(path = %path.display(), "permission denied");
                return Ok(TreeNode::denied(name, rel_path));
            }
            Err(e) => return Err(Error::read(path, e)),
        };

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let child_path = join_relative(&rel_path, &entry.name);
            children.push(self.walk_entry(&entry.path, entry.name, child_path, entry.is_dir)?);
        }

        Ok(TreeNode::directory(name, rel_path, children))
    }

    /// Read, filter, and sort the immediate entries of a directory.
    ///
    /// A permission error while stat-ing an entry fails the whole listing, so
    /// the parent is recorded as denied rather than its subdirectories as files.
    fn read_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if !self.filter.is_included(&name) {
                trace!(name = %name, "skipping hidden entry");
                continue;
            }

            let path = entry.path();
            let is_dir = match fs::metadata(&path) {
                Ok(meta) => meta.is_dir(),
                // Dangling symlink
                Err(e) if e.kind() == io::ErrorKind::NotFound => false,
                Err(e) => return Err(e),
            };
            entries.push(Entry {
                key: SortKey::new(is_dir, &name),
                name,
                path,
                is_dir,
            });
        }

        // Stable, so names equal up to case keep enumeration order
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

/// Build a tree with the default configuration.
pub fn build_tree(root: &Path) -> Result<TreeNode> {
    TreeWalker::default().walk(root)
}
