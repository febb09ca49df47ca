use termtree::Tree;
use tracing::instrument;

use crate::node::NodeRef;

pub trait Render {
    fn to_tree_string(&self) -> Tree<String>;
}

impl Render for NodeRef {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let node_borrowed = &self.borrow();

        // The root of the Tree<String> is the node's kind label
        let root = node_borrowed.kind().to_string();

        // Recursively construct the children
        let leaves: Vec<_> = node_borrowed
            .children()
            .iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}
