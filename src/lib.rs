//! Composite decision-tree structure.
//!
//! A small in-memory hierarchy of decision and leaf nodes with two external
//! traversal strategies (pre-order and breadth-first), visitor-based
//! computations dispatched through [`Node::accept`], and a cyclic
//! [`TreeBuilder`] state machine that grows and prunes the tree through a
//! cursor.
//!
//! Nodes are shared handles ([`NodeRef`]); acyclicity is a construction
//! convention, not checked at traversal time.

pub mod builder;
pub mod errors;
pub mod node;
pub mod render;
pub mod tree;
pub mod util;
pub mod visitor;

pub use builder::{BuildState, TreeBuilder};
pub use errors::{TreeError, TreeResult};
pub use node::{Node, NodeKind, NodeRef};
pub use render::Render;
pub use tree::{BreadthFirstIter, DecisionTree, PreOrderIter};
pub use visitor::{CountLeavesVisitor, DepthVisitor, Visitor};
