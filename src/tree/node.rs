//! Tree node types serialized into the output document

use serde::{Deserialize, Serialize};

/// Kind of filesystem entry a node describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One entry in the directory hierarchy.
///
/// `children` is `None` rather than empty when a directory has no visible
/// entries, so the JSON document omits the key entirely. `error` is only ever
/// set on directories that could not be listed, and then `children` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Path relative to the traversal root; empty for the root itself.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Message recorded on a directory whose contents could not be listed.
pub const PERMISSION_DENIED: &str = "Permission denied";

impl TreeNode {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            path: path.into(),
            children: None,
            error: None,
        }
    }

    /// Create a directory node. An empty `children` vector is stored as `None`.
    pub fn directory(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            path: path.into(),
            children: (!children.is_empty()).then_some(children),
            error: None,
        }
    }

    /// Create a directory node for a directory that could not be listed.
    pub fn denied(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            path: path.into(),
            children: None,
            error: Some(PERMISSION_DENIED.to_string()),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Drop empty `children` arrays at every depth, so a loaded document
    /// follows the same absent-not-empty rule as a freshly built tree.
    pub fn normalized(mut self) -> Self {
        self.children = self
            .children
            .take()
            .map(|children| children.into_iter().map(TreeNode::normalized).collect::<Vec<_>>())
            .filter(|children| !children.is_empty());
        self
    }

    /// Child nodes, or an empty slice when the key is absent.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }
}
