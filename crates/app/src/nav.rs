use shared_types::{NavNode, SchoolRole};

/// Role metadata the shell is parameterized with: which portal this is and
/// the nav tree it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleShell {
    pub role: SchoolRole,
    pub brand: &'static str,
    pub tree: Vec<NavNode>,
}

pub fn shell_for(role: SchoolRole) -> RoleShell {
    RoleShell {
        role,
        brand: "Acadix",
        tree: tree_for(role),
    }
}

pub fn tree_for(role: SchoolRole) -> Vec<NavNode> {
    match role {
        SchoolRole::SuperAdmin => super_admin_tree(),
        SchoolRole::SchoolAdmin => school_admin_tree(),
        SchoolRole::Student => student_tree(),
        SchoolRole::Staff => staff_tree(),
    }
}

fn super_admin_tree() -> Vec<NavNode> {
    vec![
        NavNode::leaf("sa-dashboard", "Dashboard", "/super-admin/dashboard").with_icon("dashboard"),
        NavNode::leaf("sa-schools", "Schools", "/super-admin/schools").with_icon("briefcase"),
        NavNode::leaf("sa-admins", "Administrators", "/super-admin/admins").with_icon("user-check"),
        NavNode::leaf("sa-settings", "Platform Settings", "/super-admin/settings").with_icon("settings"),
    ]
}

fn school_admin_tree() -> Vec<NavNode> {
    vec![
        NavNode::leaf("ad-dashboard", "Dashboard", "/school-admin/dashboard").with_icon("dashboard"),
        NavNode::group(
            "ad-academics",
            "Academics",
            vec![
                NavNode::leaf("ad-classes", "Classes", "/school-admin/classes"),
                NavNode::leaf("ad-exams", "Exams", "/school-admin/exams"),
                NavNode::leaf("ad-attendance", "Attendance", "/school-admin/attendance"),
            ],
        )
        .with_icon("book-open"),
        NavNode::group(
            "ad-admissions",
            "Admissions",
            vec![
                NavNode::leaf("ad-students", "Students", "/school-admin/students"),
                NavNode::leaf(
                    "ad-students-archive",
                    "Archived Students",
                    "/school-admin/students-archive",
                ),
                NavNode::leaf("ad-enquiries", "Enquiries", "/school-admin/enquiries"),
            ],
        )
        .with_icon("users"),
        NavNode::group(
            "ad-finance",
            "Finance",
            vec![
                NavNode::leaf("ad-fees", "Fee Structures", "/school-admin/fees"),
                NavNode::leaf("ad-payroll", "Payroll", "/school-admin/payroll"),
            ],
        )
        .with_icon("file-text"),
        NavNode::group(
            "ad-library",
            "Library",
            vec![
                NavNode::leaf("ad-books", "Books", "/school-admin/library/books"),
                NavNode::leaf("ad-issues", "Issued Books", "/school-admin/library/issues"),
            ],
        )
        .with_icon("folder"),
        NavNode::leaf("ad-events", "Events", "/school-admin/events").with_icon("calendar"),
        NavNode::leaf("ad-helpdesk", "Helpdesk", "/school-admin/helpdesk").with_icon("bell"),
    ]
}

fn student_tree() -> Vec<NavNode> {
    vec![
        NavNode::leaf("st-dashboard", "Dashboard", "/student/dashboard").with_icon("dashboard"),
        NavNode::leaf("st-courses", "My Courses", "/student/courses").with_icon("book-open"),
        NavNode::leaf("st-fees", "Fees", "/student/fees").with_icon("file-text"),
        NavNode::leaf("st-library", "Library", "/student/library").with_icon("folder"),
    ]
}

fn staff_tree() -> Vec<NavNode> {
    vec![
        NavNode::leaf("sf-dashboard", "Dashboard", "/staff/dashboard").with_icon("dashboard"),
        NavNode::leaf("sf-attendance", "My Attendance", "/staff/attendance").with_icon("clock"),
        NavNode::leaf("sf-leave", "Leave Requests", "/staff/leave").with_icon("calendar"),
        NavNode::leaf("sf-settings", "Settings", "/staff/settings").with_icon("settings"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use pretty_assertions::assert_eq;
    use shared_types::{resolve_active, ALL_ROLES};

    fn leaf_paths(nodes: &[NavNode], out: &mut Vec<String>) {
        for node in nodes {
            if let Some(path) = node.path() {
                out.push(path.to_string());
            }
            leaf_paths(node.children(), out);
        }
    }

    #[test]
    fn every_nav_path_maps_to_a_real_route() {
        for role in ALL_ROLES {
            let mut paths = Vec::new();
            leaf_paths(&tree_for(*role), &mut paths);
            assert!(!paths.is_empty());
            for path in paths {
                let parsed: Route = path
                    .parse()
                    .unwrap_or_else(|_| panic!("nav path {path} does not parse"));
                assert!(
                    !matches!(parsed, Route::NotFound { .. }),
                    "nav path {path} falls through to NotFound"
                );
                // Routes with query segments render them in Display; only
                // the path portion has to round-trip.
                let rendered = parsed.to_string();
                assert_eq!(rendered.split('?').next().unwrap(), path);
            }
        }
    }

    #[test]
    fn every_nav_path_stays_inside_its_role_prefix() {
        for role in ALL_ROLES {
            let mut paths = Vec::new();
            leaf_paths(&tree_for(*role), &mut paths);
            for path in paths {
                assert!(
                    path.starts_with(role.base_path()),
                    "{path} escapes {}",
                    role.base_path()
                );
            }
        }
    }

    #[test]
    fn student_detail_url_highlights_students_not_archive() {
        let tree = tree_for(SchoolRole::SchoolAdmin);
        let trail = resolve_active(&tree, "/school-admin/students/42");
        assert_eq!(trail.leaf.as_deref(), Some("ad-students"));
        assert_eq!(trail.ancestors, vec!["ad-admissions".to_string()]);

        let trail = resolve_active(&tree, "/school-admin/students-archive");
        assert_eq!(trail.leaf.as_deref(), Some("ad-students-archive"));
    }

    #[test]
    fn library_leaves_sit_at_depth_one() {
        let tree = tree_for(SchoolRole::SchoolAdmin);
        let trail = resolve_active(&tree, "/school-admin/library/issues");
        assert_eq!(trail.leaf.as_deref(), Some("ad-issues"));
        assert_eq!(trail.ancestors, vec!["ad-library".to_string()]);
    }

    #[test]
    fn node_ids_are_globally_unique_per_tree() {
        fn ids(nodes: &[NavNode], out: &mut Vec<String>) {
            for node in nodes {
                out.push(node.id().to_string());
                ids(node.children(), out);
            }
        }
        for role in ALL_ROLES {
            let mut all = Vec::new();
            ids(&tree_for(*role), &mut all);
            let mut dedup = all.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(all.len(), dedup.len(), "duplicate ids in {role:?} tree");
        }
    }
}
