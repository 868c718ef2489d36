use pretty_assertions::assert_eq;
use shared_types::{path_matches, resolve_active, ExpansionState};

use crate::common;

#[test]
fn deep_detail_url_resolves_to_its_section_leaf() {
    // A user deep-links into a course detail page. The Courses leaf is the
    // best match and its Academics parent forms the ancestor chain.
    let tree = common::academics_tree();
    let trail = resolve_active(&tree, "/a/courses/detail/9");

    assert_eq!(trail.leaf.as_deref(), Some("courses"));
    assert_eq!(trail.ancestors, vec!["academics".to_string()]);

    let mut expansion = ExpansionState::new();
    expansion.reveal(trail.ancestors);
    assert!(expansion.is_open("academics"));
    assert_eq!(expansion.open_count(), 1);
}

#[test]
fn top_level_leaf_has_no_ancestors() {
    let tree = common::academics_tree();
    let trail = resolve_active(&tree, "/a/dash");

    assert_eq!(trail.leaf.as_deref(), Some("dashboard"));
    assert!(trail.ancestors.is_empty());
}

#[test]
fn sibling_with_prefix_path_is_not_matched() {
    let tree = common::admissions_tree();

    let trail = resolve_active(&tree, "/a/students-archive");
    assert_eq!(trail.leaf.as_deref(), Some("archive"));

    let trail = resolve_active(&tree, "/a/students/15");
    assert_eq!(trail.leaf.as_deref(), Some("students"));
}

#[test]
fn query_and_fragment_are_ignored_for_matching() {
    let tree = common::academics_tree();

    let trail = resolve_active(&tree, "/a/courses?term=spring");
    assert_eq!(trail.leaf.as_deref(), Some("courses"));

    let trail = resolve_active(&tree, "/a/exams#results");
    assert_eq!(trail.leaf.as_deref(), Some("exams"));
}

#[test]
fn unmatched_path_yields_an_empty_trail() {
    let tree = common::academics_tree();
    let trail = resolve_active(&tree, "/somewhere/else");

    assert_eq!(trail.leaf, None);
    assert!(trail.ancestors.is_empty());
}

#[test]
fn boundary_rule_requires_a_segment_break() {
    assert!(path_matches("/a/students", "/a/students"));
    assert!(path_matches("/a/students", "/a/students/15"));
    assert!(!path_matches("/a/students", "/a/students-archive"));
    assert!(!path_matches("/a/students", "/a/studentsx"));
}
