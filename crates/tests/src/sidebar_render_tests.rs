use pretty_assertions::assert_eq;

use crate::common;

#[test]
fn deep_link_renders_expanded_branch_with_active_leaf() {
    let html = common::render_tree(common::academics_tree(), "/a/courses/detail/9", vec![]);

    assert!(html.contains(r#"aria-expanded="true""#), "{html}");
    assert!(html.contains("Courses"), "{html}");
    let active_rows = html.matches(r#"data-active="true""#).count();
    // The Courses leaf and its Academics ancestor are both marked.
    assert_eq!(active_rows, 2, "{html}");
}

#[test]
fn collapsed_branch_children_are_absent_from_markup() {
    let html = common::render_tree(common::academics_tree(), "/a/dash", vec![]);

    assert!(html.contains("Academics"), "{html}");
    assert!(!html.contains("Courses"), "{html}");
}

#[test]
fn manually_opened_branch_renders_alongside_the_active_one() {
    let html = common::render_tree(
        common::academics_tree(),
        "/a/dash",
        vec!["academics".to_string()],
    );

    // Dashboard is active, and the hand-opened branch shows its children.
    assert!(html.contains("Courses"), "{html}");
    assert!(html.contains(r#"data-active="true""#), "{html}");
}

#[test]
fn prefix_sibling_does_not_light_up_both_rows() {
    let html = common::render_tree(
        common::admissions_tree(),
        "/a/students-archive",
        vec!["admissions".to_string()],
    );

    assert!(html.contains("Archived Students"), "{html}");
    // One active leaf plus its ancestor group, never the prefix sibling.
    let active_rows = html.matches(r#"data-active="true""#).count();
    assert_eq!(active_rows, 2, "{html}");
}
