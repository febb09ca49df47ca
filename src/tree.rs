use std::collections::VecDeque;
use std::rc::Rc;

use tracing::instrument;

use crate::node::NodeRef;

/// Owning wrapper around the root of a node hierarchy.
///
/// The wrapper itself is cheap: it holds one handle into the shared node graph,
/// so a `DecisionTree` obtained from a builder is a live view of the builder's
/// tree, not a copy.
#[derive(Debug)]
pub struct DecisionTree {
    root: NodeRef,
}

impl DecisionTree {
    pub fn new(root: NodeRef) -> Self {
        Self { root }
    }

    pub fn root(&self) -> NodeRef {
        Rc::clone(&self.root)
    }

    /// Returns a fresh depth-first (parent before children) traversal,
    /// positioned before the first element.
    #[instrument(level = "trace", skip(self))]
    pub fn traverse_pre_order(&self) -> PreOrderIter {
        PreOrderIter::new(Rc::clone(&self.root))
    }

    /// Returns a fresh level-by-level traversal, positioned before the
    /// first element.
    #[instrument(level = "trace", skip(self))]
    pub fn traverse_breadth_first(&self) -> BreadthFirstIter {
        BreadthFirstIter::new(Rc::clone(&self.root))
    }

    /// Calculates the depth of the tree using a breadth-first traversal.
    /// Each element in the queue is a pair (node, depth).
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((Rc::clone(&self.root), 1));

        while let Some((node_rc, depth)) = queue.pop_front() {
            if depth > max_depth {
                max_depth = depth;
            }
            for child_rc in node_rc.borrow().children() {
                queue.push_back((Rc::clone(child_rc), depth + 1));
            }
        }

        max_depth
    }

    /// Number of nodes reachable from the root.
    #[instrument(level = "debug", skip(self))]
    pub fn node_count(&self) -> usize {
        self.traverse_pre_order().count()
    }

    /// Number of reachable leaf nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_count(&self) -> usize {
        self.traverse_pre_order()
            .filter(|node_rc| node_rc.borrow().is_leaf())
            .count()
    }
}

/// Depth-first traversal over an explicit stack. Single-pass: create a new
/// iterator to traverse again.
pub struct PreOrderIter {
    stack: Vec<NodeRef>,
}

impl PreOrderIter {
    fn new(root: NodeRef) -> Self {
        Self { stack: vec![root] }
    }
}

impl Iterator for PreOrderIter {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child_rc in current.borrow().children().iter().rev() {
            self.stack.push(Rc::clone(child_rc));
        }
        Some(current)
    }
}

/// Breadth-first traversal over an explicit FIFO queue. Single-pass like
/// [`PreOrderIter`].
pub struct BreadthFirstIter {
    queue: VecDeque<NodeRef>,
}

impl BreadthFirstIter {
    fn new(root: NodeRef) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self { queue }
    }
}

impl Iterator for BreadthFirstIter {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        for child_rc in current.borrow().children() {
            self.queue.push_back(Rc::clone(child_rc));
        }
        Some(current)
    }
}
