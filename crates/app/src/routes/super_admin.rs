use dioxus::prelude::*;

use crate::shell::PagePlaceholder;

#[component]
pub fn SuperAdminDashboard() -> Element {
    rsx! {
        PagePlaceholder {
            heading: "Platform Overview",
            blurb: "Tenant counts, activity, and billing status land here.",
        }
    }
}

#[component]
pub fn Schools() -> Element {
    rsx! {
        PagePlaceholder {
            heading: "Schools",
            blurb: "Every tenant school on the platform.",
        }
    }
}

#[component]
pub fn SchoolDetail(id: String) -> Element {
    rsx! {
        PagePlaceholder {
            heading: format!("School {id}"),
            blurb: "Tenant configuration and administrators.",
        }
    }
}

#[component]
pub fn Admins() -> Element {
    rsx! {
        PagePlaceholder {
            heading: "Administrators",
            blurb: "Platform-level administrator accounts.",
        }
    }
}

#[component]
pub fn PlatformSettings() -> Element {
    rsx! {
        PagePlaceholder {
            heading: "Platform Settings",
            blurb: "Global configuration for all tenants.",
        }
    }
}
