use tracing::debug;

use crate::node::Node;

/// Double-dispatch computation over the node hierarchy.
///
/// Visitors accumulate state across repeated [`Node::accept`] calls driven by
/// the caller; they never drive traversal themselves, so results of
/// order-dependent visitors reflect whatever traversal order the caller used.
pub trait Visitor {
    fn visit_decision_node(&mut self, node: &Node);
    fn visit_leaf_node(&mut self, node: &Node);
}

/// Path-counting accumulator: increments once per visited decision node.
///
/// Driven in pre-order over a tree whose decision chain is `d` deep, the
/// counter reaches `d` by the time the deepest leaf is visited. This is not a
/// computed max depth of the tree; use [`crate::tree::DecisionTree::depth`]
/// for that.
#[derive(Debug, Default)]
pub struct DepthVisitor {
    depth: usize,
}

impl DepthVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Visitor for DepthVisitor {
    fn visit_decision_node(&mut self, _node: &Node) {
        self.depth += 1;
        debug!(depth = self.depth, "DepthVisitor: descended through decision node");
    }

    fn visit_leaf_node(&mut self, _node: &Node) {
        debug!(depth = self.depth, "DepthVisitor: reached leaf");
    }
}

/// Counts the leaf nodes fed through `accept`. Order-independent: any complete
/// traversal yields the tree's leaf total.
#[derive(Debug, Default)]
pub struct CountLeavesVisitor {
    leaves: usize,
}

impl CountLeavesVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaves(&self) -> usize {
        self.leaves
    }
}

impl Visitor for CountLeavesVisitor {
    fn visit_decision_node(&mut self, _node: &Node) {
        debug!("CountLeavesVisitor: decision node, nothing to count");
    }

    fn visit_leaf_node(&mut self, node: &Node) {
        // The kind check is redundant with the dispatch, kept as a guard.
        if node.is_leaf() {
            self.leaves += 1;
        }
        debug!(leaves = self.leaves, "CountLeavesVisitor: leaf counted");
    }
}
