use dioxus::prelude::*;

use crate::shell::PagePlaceholder;

#[component]
pub fn StaffDashboard() -> Element {
    rsx! {
        PagePlaceholder {
            heading: "My Dashboard",
            blurb: "Today's classes and pending approvals.",
        }
    }
}

#[component]
pub fn StaffAttendance() -> Element {
    rsx! {
        PagePlaceholder { heading: "My Attendance", blurb: "Clock-in history." }
    }
}

#[component]
pub fn LeaveRequests() -> Element {
    rsx! {
        PagePlaceholder { heading: "Leave Requests", blurb: "Leave balance and requests." }
    }
}

/// The settings page keeps its active tab in the query string so a tab can
/// be linked to directly; the sidebar still highlights the settings leaf
/// regardless of which tab is selected.
#[component]
pub fn StaffSettings(tab: String) -> Element {
    let active = if tab.is_empty() { "profile".to_string() } else { tab };

    rsx! {
        PagePlaceholder {
            heading: "Settings",
            blurb: format!("Settings ({active} tab)."),
        }
    }
}
