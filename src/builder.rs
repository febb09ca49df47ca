use std::fmt;
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::errors::TreeResult;
use crate::node::{Node, NodeRef};
use crate::tree::DecisionTree;

/// Phase of the incremental construction cycle. States cycle forever in the
/// fixed order Splitting -> Stopping -> Pruning -> Splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Grows the tree: two decision children at the cursor.
    Splitting,
    /// Marks the cursor node as a terminus. Logs the conversion only; no
    /// structural mutation happens in this phase.
    Stopping,
    /// Shrinks the tree: drops the cursor's last child, if any.
    Pruning,
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildState::Splitting => write!(f, "SplittingState"),
            BuildState::Stopping => write!(f, "StoppingState"),
            BuildState::Pruning => write!(f, "PruningState"),
        }
    }
}

/// Incremental tree constructor driven by a cyclic state machine.
///
/// Owns the root of the tree under construction and a cursor, a non-owning
/// position marker (an extra handle, never a copy) identifying the node the
/// current state operates on. The cursor always stays reachable from the root:
/// Splitting moves it to a freshly attached child and Pruning only ever removes
/// a child *of* the cursor, never the cursor itself.
///
/// State behavior lives here and takes the context as `&mut self`, which sides
/// with explicit context passing over a state-to-builder back-reference.
#[derive(Debug)]
pub struct TreeBuilder {
    root: NodeRef,
    cursor: NodeRef,
    state: BuildState,
}

impl TreeBuilder {
    /// Fresh builder over a single empty decision root, cursor at the root.
    pub fn new(initial: BuildState) -> Self {
        let root = Node::decision();
        let cursor = Rc::clone(&root);
        debug!(state = %initial, "TreeBuilder: starting in state");
        Self {
            root,
            cursor,
            state: initial,
        }
    }

    /// Executes one step: delegates to the current state, which mutates the
    /// tree and installs the next state within the same call.
    #[instrument(level = "debug", skip(self))]
    pub fn build_step(&mut self) -> TreeResult<()> {
        match self.state {
            BuildState::Splitting => self.split(),
            BuildState::Stopping => self.stop(),
            BuildState::Pruning => self.prune(),
        }
    }

    /// Live view over the builder's current root, sharing the node graph.
    pub fn get_tree(&self) -> DecisionTree {
        DecisionTree::new(Rc::clone(&self.root))
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn root(&self) -> NodeRef {
        Rc::clone(&self.root)
    }

    pub fn cursor(&self) -> NodeRef {
        Rc::clone(&self.cursor)
    }

    fn split(&mut self) -> TreeResult<()> {
        debug!("SplittingState: splitting the node, creating decision children");
        let left = Node::decision();
        let right = Node::decision();

        self.cursor.borrow_mut().add_child(Rc::clone(&left))?;
        self.cursor.borrow_mut().add_child(right)?;
        self.cursor = left;

        self.transition_to(BuildState::Stopping);
        Ok(())
    }

    fn stop(&mut self) -> TreeResult<()> {
        // Intent is to turn the cursor node into a leaf; the structure is
        // deliberately left untouched.
        debug!("StoppingState: stopping the split, cursor node becomes a terminus");

        self.transition_to(BuildState::Pruning);
        Ok(())
    }

    fn prune(&mut self) -> TreeResult<()> {
        debug!("PruningState: pruning the tree");
        match self.cursor.borrow_mut().remove_last_child() {
            Some(removed) => {
                debug!(kind = %removed.borrow().kind(), "PruningState: removed last child")
            }
            None => debug!("PruningState: cursor has no children, nothing to prune"),
        }

        self.transition_to(BuildState::Splitting);
        Ok(())
    }

    fn transition_to(&mut self, next: BuildState) {
        debug!(from = %self.state, to = %next, "TreeBuilder: transition");
        self.state = next;
    }
}
