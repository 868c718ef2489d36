use dioxus::prelude::*;
use shared_types::SchoolRole;

use crate::nav::shell_for;
use crate::session::use_session;
use crate::shell::AppShell;

mod auth;
mod not_found;
mod school_admin;
mod staff;
mod student;
mod super_admin;

pub use auth::{Login, PortalSelect};
pub use not_found::NotFound;
pub use school_admin::*;
pub use staff::*;
pub use student::*;
pub use super_admin::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[redirect("/", || Route::PortalSelect {})]
    #[route("/auth")]
    PortalSelect {},
    #[route("/auth/login?:role")]
    Login { role: String },

    #[layout(SessionGate)]
        #[nest("/super-admin")]
            #[layout(SuperAdminLayout)]
                #[redirect("/", || Route::SuperAdminDashboard {})]
                #[route("/dashboard")]
                SuperAdminDashboard {},
                #[route("/schools")]
                Schools {},
                #[route("/schools/:id")]
                SchoolDetail { id: String },
                #[route("/admins")]
                Admins {},
                #[route("/settings")]
                PlatformSettings {},
            #[end_layout]
        #[end_nest]
        #[nest("/school-admin")]
            #[layout(SchoolAdminLayout)]
                #[redirect("/", || Route::SchoolAdminDashboard {})]
                #[route("/dashboard")]
                SchoolAdminDashboard {},
                #[route("/classes")]
                Classes {},
                #[route("/exams")]
                Exams {},
                #[route("/attendance")]
                Attendance {},
                #[route("/students")]
                Students {},
                #[route("/students/:id")]
                StudentDetail { id: String },
                #[route("/students-archive")]
                StudentsArchive {},
                #[route("/enquiries")]
                Enquiries {},
                #[route("/fees")]
                FeeStructures {},
                #[route("/payroll")]
                Payroll {},
                #[route("/library/books")]
                LibraryBooks {},
                #[route("/library/issues")]
                LibraryIssues {},
                #[route("/events")]
                Events {},
                #[route("/helpdesk")]
                Helpdesk {},
            #[end_layout]
        #[end_nest]
        #[nest("/student")]
            #[layout(StudentLayout)]
                #[redirect("/", || Route::StudentDashboard {})]
                #[route("/dashboard")]
                StudentDashboard {},
                #[route("/courses")]
                MyCourses {},
                #[route("/courses/:id")]
                CourseDetail { id: String },
                #[route("/fees")]
                MyFees {},
                #[route("/library")]
                StudentLibrary {},
            #[end_layout]
        #[end_nest]
        #[nest("/staff")]
            #[layout(StaffLayout)]
                #[redirect("/", || Route::StaffDashboard {})]
                #[route("/dashboard")]
                StaffDashboard {},
                #[route("/attendance")]
                StaffAttendance {},
                #[route("/leave")]
                LeaveRequests {},
                #[route("/settings?:tab")]
                StaffSettings { tab: String },
            #[end_layout]
        #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Landing route for a freshly authenticated user.
pub fn dashboard_route(role: SchoolRole) -> Route {
    match role {
        SchoolRole::SuperAdmin => Route::SuperAdminDashboard {},
        SchoolRole::SchoolAdmin => Route::SchoolAdminDashboard {},
        SchoolRole::Student => Route::StudentDashboard {},
        SchoolRole::Staff => Route::StaffDashboard {},
    }
}

/// Layout wrapping everything that requires a session. Unauthenticated
/// visitors are bounced to the portal selection page; nothing behind the
/// gate renders until the redirect lands.
#[component]
fn SessionGate() -> Element {
    let session = use_session();
    let nav = navigator();
    let authenticated = session.is_authenticated();

    use_effect(move || {
        if !session.is_authenticated() {
            nav.push(Route::PortalSelect {});
        }
    });

    if !authenticated {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn SuperAdminLayout() -> Element {
    rsx! {
        AppShell { shell: shell_for(SchoolRole::SuperAdmin) }
    }
}

#[component]
fn SchoolAdminLayout() -> Element {
    rsx! {
        AppShell { shell: shell_for(SchoolRole::SchoolAdmin) }
    }
}

#[component]
fn StudentLayout() -> Element {
    rsx! {
        AppShell { shell: shell_for(SchoolRole::Student) }
    }
}

#[component]
fn StaffLayout() -> Element {
    rsx! {
        AppShell { shell: shell_for(SchoolRole::Staff) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn root_redirects_to_portal_selection() {
        let route: Route = "/".parse().expect("root should parse");
        assert_eq!(route, Route::PortalSelect {});
    }

    #[test]
    fn bare_role_prefix_redirects_to_its_dashboard() {
        let route: Route = "/school-admin/".parse().expect("prefix should parse");
        assert_eq!(route, Route::SchoolAdminDashboard {});
    }

    #[test]
    fn archive_path_is_not_swallowed_by_the_detail_param() {
        let route: Route = "/school-admin/students-archive".parse().unwrap();
        assert_eq!(route, Route::StudentsArchive {});

        let route: Route = "/school-admin/students/42".parse().unwrap();
        assert_eq!(
            route,
            Route::StudentDetail {
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route: Route = "/no/such/page".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }

    #[test]
    fn dashboard_route_covers_every_role() {
        use shared_types::ALL_ROLES;
        for role in ALL_ROLES {
            let route = dashboard_route(*role);
            assert!(route.to_string().starts_with(role.base_path()));
        }
    }
}
