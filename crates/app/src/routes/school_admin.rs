use dioxus::prelude::*;

use crate::shell::PagePlaceholder;

#[component]
pub fn SchoolAdminDashboard() -> Element {
    rsx! {
        PagePlaceholder {
            heading: "School Overview",
            blurb: "Enrolment, attendance, and fee collection at a glance.",
        }
    }
}

#[component]
pub fn Classes() -> Element {
    rsx! {
        PagePlaceholder { heading: "Classes", blurb: "Class and section management." }
    }
}

#[component]
pub fn Exams() -> Element {
    rsx! {
        PagePlaceholder { heading: "Exams", blurb: "Exam schedules and results." }
    }
}

#[component]
pub fn Attendance() -> Element {
    rsx! {
        PagePlaceholder { heading: "Attendance", blurb: "Daily attendance registers." }
    }
}

#[component]
pub fn Students() -> Element {
    rsx! {
        PagePlaceholder { heading: "Students", blurb: "Enrolled students." }
    }
}

#[component]
pub fn StudentDetail(id: String) -> Element {
    rsx! {
        PagePlaceholder {
            heading: format!("Student {id}"),
            blurb: "Profile, guardians, and academic history.",
        }
    }
}

#[component]
pub fn StudentsArchive() -> Element {
    rsx! {
        PagePlaceholder {
            heading: "Archived Students",
            blurb: "Students who have left the school.",
        }
    }
}

#[component]
pub fn Enquiries() -> Element {
    rsx! {
        PagePlaceholder { heading: "Enquiries", blurb: "Admission enquiries pipeline." }
    }
}

#[component]
pub fn FeeStructures() -> Element {
    rsx! {
        PagePlaceholder { heading: "Fee Structures", blurb: "Fee heads and schedules." }
    }
}

#[component]
pub fn Payroll() -> Element {
    rsx! {
        PagePlaceholder { heading: "Payroll", blurb: "Staff salary runs." }
    }
}

#[component]
pub fn LibraryBooks() -> Element {
    rsx! {
        PagePlaceholder { heading: "Books", blurb: "Library catalogue." }
    }
}

#[component]
pub fn LibraryIssues() -> Element {
    rsx! {
        PagePlaceholder { heading: "Issued Books", blurb: "Current loans and returns." }
    }
}

#[component]
pub fn Events() -> Element {
    rsx! {
        PagePlaceholder { heading: "Events", blurb: "School calendar and events." }
    }
}

#[component]
pub fn Helpdesk() -> Element {
    rsx! {
        PagePlaceholder { heading: "Helpdesk", blurb: "Support tickets from staff and parents." }
    }
}
