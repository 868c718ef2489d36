use dioxus::prelude::*;
use shared_types::{resolve_active, ExpansionState, NavNode};
use shared_ui::components::SidebarTree;

/// A small school portal tree: a top-level dashboard and one expandable
/// academics section.
pub fn academics_tree() -> Vec<NavNode> {
    vec![
        NavNode::leaf("dashboard", "Dashboard", "/a/dash").with_icon("dashboard"),
        NavNode::group(
            "academics",
            "Academics",
            vec![
                NavNode::leaf("courses", "Courses", "/a/courses"),
                NavNode::leaf("exams", "Exams", "/a/exams"),
            ],
        )
        .with_icon("book-open"),
    ]
}

/// Tree with the sibling-prefix trap: one leaf path is a string prefix of
/// another leaf's path.
pub fn admissions_tree() -> Vec<NavNode> {
    vec![NavNode::group(
        "admissions",
        "Admissions",
        vec![
            NavNode::leaf("students", "Students", "/a/students"),
            NavNode::leaf("archive", "Archived Students", "/a/students-archive"),
        ],
    )]
}

#[derive(Props, Clone, PartialEq)]
pub struct TreeHarnessProps {
    pub items: Vec<NavNode>,
    pub path: String,
    #[props(default)]
    pub manually_open: Vec<String>,
}

/// Renders a [`SidebarTree`] the way the application shell mounts it:
/// expansion is seeded with the active branch's ancestors (the auto-expand
/// step), optionally after some groups were opened by hand.
#[allow(non_snake_case)]
pub fn TreeHarness(props: TreeHarnessProps) -> Element {
    let seed = props.clone();
    let expansion = use_signal(move || {
        let mut state = ExpansionState::new();
        state.reveal(seed.manually_open.clone());
        state.reveal(resolve_active(&seed.items, &seed.path).ancestors);
        state
    });

    rsx! {
        SidebarTree {
            items: props.items.clone(),
            current_path: props.path.clone(),
            expansion,
            on_navigate: move |_| {},
        }
    }
}

/// SSR-render the harness for assertion on the produced markup.
pub fn render_tree(items: Vec<NavNode>, path: &str, manually_open: Vec<String>) -> String {
    let mut dom = VirtualDom::new_with_props(
        TreeHarness,
        TreeHarnessProps {
            items,
            path: path.to_string(),
            manually_open,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
