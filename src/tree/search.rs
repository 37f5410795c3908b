//! Name search over a built or loaded tree

use super::node::TreeNode;

/// Check if a node's name contains `query`, ignoring case.
/// An empty query matches everything.
pub fn matches_query(node: &TreeNode, query: &str) -> bool {
    query.is_empty() || node.name.to_lowercase().contains(&query.to_lowercase())
}

/// Prune a tree to the nodes whose names contain `query`, plus their ancestors.
///
/// A matching directory keeps only its matching descendants. Returns `None`
/// when nothing in the tree matches.
pub fn filter_tree(node: &TreeNode, query: &str) -> Option<TreeNode> {
    if query.is_empty() {
        return Some(node.clone());
    }

    let children: Vec<TreeNode> = node
        .children()
        .iter()
        .filter_map(|child| filter_tree(child, query))
        .collect();

    if !matches_query(node, query) && children.is_empty() {
        return None;
    }

    Some(TreeNode {
        children: (!children.is_empty()).then_some(children),
        ..node.clone_shallow()
    })
}

impl TreeNode {
    /// Copy of this node without its children.
    fn clone_shallow(&self) -> TreeNode {
        TreeNode {
            name: self.name.clone(),
            kind: self.kind,
            path: self.path.clone(),
            children: None,
            error: self.error.clone(),
        }
    }
}
