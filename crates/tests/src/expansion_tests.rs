use pretty_assertions::assert_eq;
use shared_types::{resolve_active, ExpansionState};

use crate::common;

/// Drive the expansion state the way the shell does on a route change.
fn navigate(state: &mut ExpansionState, path: &str) {
    let trail = resolve_active(&common::academics_tree(), path);
    state.reveal(trail.ancestors);
}

#[test]
fn navigation_reveals_the_active_branch() {
    let mut state = ExpansionState::new();
    navigate(&mut state, "/a/courses");
    assert!(state.is_open("academics"));
}

#[test]
fn manually_opened_branch_survives_navigation_elsewhere() {
    let mut state = ExpansionState::new();
    state.toggle("academics");

    // Moving to the dashboard (no ancestors) must not collapse the branch
    // the user opened by hand.
    navigate(&mut state, "/a/dash");
    assert!(state.is_open("academics"));
}

#[test]
fn collapsed_branch_reopens_when_navigating_into_it() {
    let mut state = ExpansionState::new();
    navigate(&mut state, "/a/courses");
    state.toggle("academics");
    assert!(!state.is_open("academics"));

    navigate(&mut state, "/a/exams");
    assert!(state.is_open("academics"));
}

#[test]
fn collapse_while_inside_the_branch_sticks_until_the_next_route_change() {
    let mut state = ExpansionState::new();
    navigate(&mut state, "/a/courses");
    state.toggle("academics");

    // No navigation happened, nothing re-reveals the branch.
    assert!(!state.is_open("academics"));
    assert_eq!(state.open_count(), 0);
}
