use serde::{Deserialize, Serialize};

/// One node of a declarative sidebar navigation tree.
///
/// Identity is the explicit `id`, not the display label — sibling labels may
/// collide freely. A `Group` may also carry a `path` (a screen of its own
/// reachable by direct navigation) while still expanding into children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavNode {
    Leaf {
        id: String,
        label: String,
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    Group {
        id: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        children: Vec<NavNode>,
    },
}

impl NavNode {
    pub fn leaf(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        NavNode::Leaf {
            id: id.into(),
            label: label.into(),
            path: path.into(),
            icon: None,
        }
    }

    pub fn group(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<NavNode>,
    ) -> Self {
        NavNode::Group {
            id: id.into(),
            label: label.into(),
            icon: None,
            path: None,
            children,
        }
    }

    /// Attach a symbolic icon key (resolved to an actual glyph by the renderer).
    pub fn with_icon(mut self, key: impl Into<String>) -> Self {
        match &mut self {
            NavNode::Leaf { icon, .. } | NavNode::Group { icon, .. } => *icon = Some(key.into()),
        }
        self
    }

    /// Give a group its own directly navigable path.
    pub fn with_path(mut self, p: impl Into<String>) -> Self {
        if let NavNode::Group { path, .. } = &mut self {
            *path = Some(p.into());
        }
        self
    }

    pub fn id(&self) -> &str {
        match self {
            NavNode::Leaf { id, .. } | NavNode::Group { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NavNode::Leaf { label, .. } | NavNode::Group { label, .. } => label,
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            NavNode::Leaf { icon, .. } | NavNode::Group { icon, .. } => icon.as_deref(),
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            NavNode::Leaf { path, .. } => Some(path),
            NavNode::Group { path, .. } => path.as_deref(),
        }
    }

    pub fn children(&self) -> &[NavNode] {
        match self {
            NavNode::Leaf { .. } => &[],
            NavNode::Group { children, .. } => children,
        }
    }
}

/// Result of resolving a tree against the current URL path: the matched leaf
/// (if any) and the ids of its enclosing groups, outermost first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveTrail {
    pub leaf: Option<String>,
    pub ancestors: Vec<String>,
}

impl ActiveTrail {
    pub fn is_leaf(&self, id: &str) -> bool {
        self.leaf.as_deref() == Some(id)
    }

    pub fn is_ancestor(&self, id: &str) -> bool {
        self.ancestors.iter().any(|a| a == id)
    }
}

/// Whether `current` falls under `path` with a proper segment boundary.
///
/// `/a/students` matches `/a/students` and `/a/students/42`, but never
/// `/a/students-archive/42`.
pub fn path_matches(path: &str, current: &str) -> bool {
    current == path
        || (current.starts_with(path) && current.as_bytes().get(path.len()) == Some(&b'/'))
}

/// Resolve the active leaf and its ancestor chain for `current_path`.
///
/// Query string and fragment are ignored — `?tab=` style params select
/// in-page tabs, not tree nodes. Total over any input: a malformed tree with
/// overlapping paths resolves deterministically to the first match in
/// document order, with one refinement: a group's own path is considered
/// only after its subtree, so when both a group and one of its children
/// match, the child wins even though the group row renders first.
pub fn resolve_active(tree: &[NavNode], current_path: &str) -> ActiveTrail {
    let current = current_path
        .split(['?', '#'])
        .next()
        .unwrap_or(current_path);

    let mut trail = ActiveTrail::default();
    let mut chain = Vec::new();
    walk(tree, current, &mut chain, &mut trail);
    trail
}

fn walk(
    nodes: &[NavNode],
    current: &str,
    chain: &mut Vec<String>,
    trail: &mut ActiveTrail,
) -> bool {
    for node in nodes {
        match node {
            NavNode::Leaf { id, path, .. } => {
                if path_matches(path, current) {
                    trail.leaf = Some(id.clone());
                    trail.ancestors = chain.clone();
                    return true;
                }
            }
            NavNode::Group {
                id, path, children, ..
            } => {
                chain.push(id.clone());
                if walk(children, current, chain, trail) {
                    chain.pop();
                    return true;
                }
                chain.pop();
                // A group with its own path can be the active "leaf" when
                // none of its children match.
                if let Some(p) = path {
                    if path_matches(p, current) {
                        trail.leaf = Some(id.clone());
                        trail.ancestors = chain.clone();
                        return true;
                    }
                }
            }
        }
    }
    false
}
