//! Tests for the TreeBuilder state machine

use std::rc::Rc;

use rstest::rstest;

use dectree::{BuildState, Node, TreeBuilder};

#[ctor::ctor]
fn init() {
    dectree::util::testing::init_test_setup();
}

// ============================================================
// Single Step Tests
// ============================================================

#[test]
fn given_fresh_builder_when_one_splitting_step_then_two_decision_children_cursor_on_first() {
    // Arrange
    let mut builder = TreeBuilder::new(BuildState::Splitting);

    // Act
    builder.build_step().unwrap();

    // Assert
    let root = builder.root();
    let root_ref = root.borrow();
    assert_eq!(root_ref.children().len(), 2);
    assert!(root_ref.children().iter().all(|c| !c.borrow().is_leaf()));
    assert!(Rc::ptr_eq(&builder.cursor(), &root_ref.children()[0]));
    assert_eq!(builder.state(), BuildState::Stopping);
}

#[test]
fn given_stopping_state_when_stepping_then_no_structural_mutation() {
    // The stopping phase only logs its terminus intent.
    let mut builder = TreeBuilder::new(BuildState::Splitting);
    builder.build_step().unwrap();
    let nodes_before = builder.get_tree().node_count();
    let cursor_before = builder.cursor();

    builder.build_step().unwrap();

    assert_eq!(builder.get_tree().node_count(), nodes_before);
    assert!(Rc::ptr_eq(&builder.cursor(), &cursor_before));
    assert_eq!(builder.state(), BuildState::Pruning);
}

#[test]
fn given_pruning_state_when_cursor_has_children_then_removes_last_child_only() {
    let mut builder = TreeBuilder::new(BuildState::Pruning);
    // Attach two children to the root cursor by hand.
    let keep = Node::leaf();
    builder
        .cursor()
        .borrow_mut()
        .add_child(Rc::clone(&keep))
        .unwrap();
    builder.cursor().borrow_mut().add_child(Node::leaf()).unwrap();

    builder.build_step().unwrap();

    let cursor = builder.cursor();
    let cursor_ref = cursor.borrow();
    assert_eq!(cursor_ref.children().len(), 1);
    assert!(Rc::ptr_eq(&cursor_ref.children()[0], &keep));
    assert_eq!(builder.state(), BuildState::Splitting);
}

#[test]
fn given_pruning_state_when_cursor_childless_then_noop() {
    let mut builder = TreeBuilder::new(BuildState::Pruning);

    builder.build_step().unwrap();

    assert_eq!(builder.get_tree().node_count(), 1);
    assert_eq!(builder.state(), BuildState::Splitting);
}

// ============================================================
// Cycle Tests
// ============================================================

#[rstest]
#[case(3)]
#[case(6)]
#[case(12)]
fn given_builder_when_running_multiple_of_three_steps_then_back_in_splitting(
    #[case] steps: usize,
) {
    let mut builder = TreeBuilder::new(BuildState::Splitting);

    for _ in 0..steps {
        builder.build_step().unwrap();
    }

    assert_eq!(builder.state(), BuildState::Splitting);
}

#[test]
fn given_builder_when_running_full_cycles_then_tree_grows_along_the_cursor_path() {
    let mut builder = TreeBuilder::new(BuildState::Splitting);

    // Cycle 1: split adds two nodes, stop is a no-op, prune finds the cursor
    // (a fresh child) childless and removes nothing.
    for _ in 0..3 {
        builder.build_step().unwrap();
    }
    assert_eq!(builder.get_tree().node_count(), 3);

    // Cycle 2: another split hangs two nodes off the previous cursor.
    for _ in 0..3 {
        builder.build_step().unwrap();
    }
    assert_eq!(builder.get_tree().node_count(), 5);
    assert_eq!(builder.get_tree().depth(), 3);
}

// ============================================================
// Live View Tests
// ============================================================

#[test]
fn given_tree_view_when_builder_keeps_stepping_then_view_observes_mutations() {
    let mut builder = TreeBuilder::new(BuildState::Splitting);
    let view = builder.get_tree();
    assert_eq!(view.node_count(), 1);

    builder.build_step().unwrap();

    // Same node graph, not a copy.
    assert_eq!(view.node_count(), 3);
    assert!(Rc::ptr_eq(&view.root(), &builder.root()));
}

#[test]
fn given_builder_when_cursor_moves_then_cursor_stays_reachable_from_root() {
    let mut builder = TreeBuilder::new(BuildState::Splitting);

    for _ in 0..9 {
        builder.build_step().unwrap();
        let cursor = builder.cursor();
        let reachable = builder
            .get_tree()
            .traverse_pre_order()
            .any(|n| Rc::ptr_eq(&n, &cursor));
        assert!(reachable, "cursor must stay inside the owned tree");
    }
}
