use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdCalendar, LdClock, LdFileText, LdFolder,
    LdLayoutDashboard, LdPackage, LdScale, LdSearch, LdSettings, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{resolve_active, ActiveTrail, ExpansionState, NavNode};

/// Recursive sidebar menu driven by a [`NavNode`] tree.
///
/// Router-agnostic on purpose: it takes the current path as a string and
/// emits navigation intents through `on_navigate`, so the same renderer
/// serves every role layout and renders in plain SSR for tests.
#[component]
pub fn SidebarTree(
    items: Vec<NavNode>,
    current_path: String,
    expansion: Signal<ExpansionState>,
    on_navigate: EventHandler<String>,
) -> Element {
    let trail = resolve_active(&items, &current_path);
    let rows = items.iter().map(|node| {
        let id = node.id().to_string();
        rsx! {
            SidebarNode {
                key: "{id}",
                node: node.clone(),
                trail: trail.clone(),
                expansion,
                on_navigate,
                level: 0usize,
            }
        }
    });

    rsx! {
        ul { class: "sidebar-tree", role: "tree",
            {rows}
        }
    }
}

/// One row of the tree: a navigable leaf or an expandable group.
///
/// A group that carries its own path stays a toggle — expansion always wins
/// when children exist — but exposes the path as `data-path` so the row is
/// still modeled as navigable.
#[component]
fn SidebarNode(
    node: NavNode,
    trail: ActiveTrail,
    expansion: Signal<ExpansionState>,
    on_navigate: EventHandler<String>,
    level: usize,
) -> Element {
    let id = node.id().to_string();

    if node.children().is_empty() {
        let path = node.path().unwrap_or_default().to_string();
        let active = trail.is_leaf(&id);

        return rsx! {
            li { class: "sidebar-tree-item", role: "none",
                button {
                    class: "sidebar-leaf",
                    r#type: "button",
                    role: "treeitem",
                    "data-active": if active { "true" } else { "false" },
                    "data-level": "{level}",
                    onclick: move |_| on_navigate.call(path.clone()),
                    NodeIcon { key_name: node.icon().map(str::to_string) }
                    span { class: "sidebar-node-label", {node.label().to_string()} }
                }
            }
        };
    }

    let open = expansion.read().is_open(&id);
    let active = trail.is_ancestor(&id) || trail.is_leaf(&id);
    let toggle_id = id.clone();

    rsx! {
        li { class: "sidebar-tree-item", role: "none",
            button {
                class: "sidebar-group-toggle",
                r#type: "button",
                role: "treeitem",
                "aria-expanded": if open { "true" } else { "false" },
                "data-active": if active { "true" } else { "false" },
                "data-level": "{level}",
                "data-path": node.path().unwrap_or_default().to_string(),
                onclick: move |_| expansion.write().toggle(&toggle_id),
                NodeIcon { key_name: node.icon().map(str::to_string) }
                span { class: "sidebar-node-label", {node.label().to_string()} }
                span { class: "sidebar-chevron", "data-open": if open { "true" } else { "false" }, "\u{203A}" }
            }
            if open {
                ul { class: "sidebar-subtree", role: "group",
                    {node.children().iter().map(|child| {
                        let child_id = child.id().to_string();
                        rsx! {
                            SidebarNode {
                                key: "{child_id}",
                                node: child.clone(),
                                trail: trail.clone(),
                                expansion,
                                on_navigate,
                                level: level + 1,
                            }
                        }
                    })}
                }
            }
        }
    }
}

/// Map a symbolic icon key from the nav tree to a lucide glyph.
/// Unknown keys render nothing rather than erroring.
#[component]
fn NodeIcon(key_name: Option<String>) -> Element {
    let Some(key) = key_name else {
        return rsx! {};
    };

    match key.as_str() {
        "dashboard" => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        "settings" => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        "users" => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        "user-check" => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        "calendar" => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        "clock" => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
        "file-text" => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        "folder" => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        "book-open" => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        "briefcase" => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        "shield" => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        "package" => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        "search" => rsx! { Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 } },
        "bell" => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
        "scale" => rsx! { Icon::<LdScale> { icon: LdScale, width: 18, height: 18 } },
        _ => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<NavNode> {
        vec![
            NavNode::leaf("dashboard", "Dashboard", "/a/dash").with_icon("dashboard"),
            NavNode::group(
                "academics",
                "Academics",
                vec![
                    NavNode::leaf("courses", "Courses", "/a/courses"),
                    NavNode::leaf("exams", "Exams", "/a/exams"),
                ],
            ),
        ]
    }

    #[component]
    fn Harness(path: String) -> Element {
        // Mirror the shell's auto-expand: seed the open set with the active
        // branch's ancestors before first render.
        let seed_path = path.clone();
        let expansion = use_signal(move || {
            let mut state = ExpansionState::new();
            state.reveal(resolve_active(&sample(), &seed_path).ancestors);
            state
        });

        rsx! {
            SidebarTree {
                items: sample(),
                current_path: path,
                expansion,
                on_navigate: move |_| {},
            }
        }
    }

    fn render(path: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                path: path.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn active_leaf_and_open_ancestor_are_marked() {
        let html = render("/a/courses/detail/9");
        // The Academics group auto-opened, so Courses is in the DOM and active.
        assert!(html.contains(r#"aria-expanded="true""#), "{html}");
        assert!(html.contains("Courses"), "{html}");
        assert!(html.contains(r#"data-active="true""#), "{html}");
    }

    #[test]
    fn collapsed_group_children_are_not_rendered() {
        let html = render("/a/dash");
        assert!(html.contains("Academics"), "{html}");
        assert!(!html.contains("Courses"), "{html}");
        assert!(html.contains(r#"aria-expanded="false""#), "{html}");
    }

    #[test]
    fn nested_children_render_with_increased_level() {
        let html = render("/a/exams");
        assert!(html.contains(r#"data-level="1""#), "{html}");
    }

    #[test]
    fn inactive_leaf_is_not_marked_active() {
        let html = render("/a/dash");
        let active_rows = html.matches(r#"data-active="true""#).count();
        assert_eq!(active_rows, 1, "{html}");
    }
}
