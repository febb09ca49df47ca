use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::errors::{TreeError, TreeResult};
use crate::visitor::Visitor;

/// Shared handle to a node in the hierarchy.
///
/// The `RefCell` allows borrowing the contents, the `Rc` allows shared ownership:
/// the tree owns its nodes through parent child vectors, while cursors and
/// traversal stacks hold additional non-structural clones of the handle.
/// Tree discipline (a node appears in exactly one parent's child sequence) is a
/// construction convention, not checked at runtime; a cycle would make the
/// traversals non-terminating.
pub type NodeRef = Rc<RefCell<Node>>;

/// Kind of a node, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Internal node, may hold children.
    Decision,
    /// Terminal node, never holds children.
    Leaf,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Decision => write!(f, "DecisionNode"),
            NodeKind::Leaf => write!(f, "LeafNode"),
        }
    }
}

/// Composite tree node: decision nodes carry children in insertion order,
/// leaf nodes carry none.
#[derive(Debug)]
pub struct Node {
    kind: NodeKind,
    children: Vec<NodeRef>,
}

impl Node {
    /// Creates a new internal (decision) node with no children.
    pub fn decision() -> NodeRef {
        Rc::new(RefCell::new(Node {
            kind: NodeKind::Decision,
            children: Vec::new(),
        }))
    }

    /// Creates a new terminal (leaf) node.
    pub fn leaf() -> NodeRef {
        Rc::new(RefCell::new(Node {
            kind: NodeKind::Leaf,
            children: Vec::new(),
        }))
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    /// Appends `child` to this node's child sequence.
    ///
    /// Fails with [`TreeError::InvalidOperation`] on a leaf node; the leaf is
    /// left untouched. No cycle or duplicate checks are performed, keeping
    /// traversal O(n) (see module docs on tree discipline).
    pub fn add_child(&mut self, child: NodeRef) -> TreeResult<()> {
        if self.is_leaf() {
            return Err(TreeError::InvalidOperation(
                "leaf nodes cannot have children".to_string(),
            ));
        }
        debug!(kind = %child.borrow().kind(), "DecisionNode: child added");
        self.children.push(child);
        Ok(())
    }

    /// Read-only view of the child sequence, in insertion order.
    /// Always empty for leaves.
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Removes and returns the last child, if any.
    pub fn remove_last_child(&mut self) -> Option<NodeRef> {
        self.children.pop()
    }

    /// Double-dispatch entry point: routes to the visitor operation matching
    /// this node's kind, without the visitor inspecting types itself.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self.kind {
            NodeKind::Decision => visitor.visit_decision_node(self),
            NodeKind::Leaf => visitor.visit_leaf_node(self),
        }
        debug!(kind = %self.kind, "visitor accepted");
    }
}
