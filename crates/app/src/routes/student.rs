use dioxus::prelude::*;

use crate::shell::PagePlaceholder;

#[component]
pub fn StudentDashboard() -> Element {
    rsx! {
        PagePlaceholder {
            heading: "My Dashboard",
            blurb: "Timetable, announcements, and due fees.",
        }
    }
}

#[component]
pub fn MyCourses() -> Element {
    rsx! {
        PagePlaceholder { heading: "My Courses", blurb: "Enrolled courses this term." }
    }
}

#[component]
pub fn CourseDetail(id: String) -> Element {
    rsx! {
        PagePlaceholder {
            heading: format!("Course {id}"),
            blurb: "Syllabus, materials, and grades.",
        }
    }
}

#[component]
pub fn MyFees() -> Element {
    rsx! {
        PagePlaceholder { heading: "Fees", blurb: "Fee invoices and payment history." }
    }
}

#[component]
pub fn StudentLibrary() -> Element {
    rsx! {
        PagePlaceholder { heading: "Library", blurb: "Borrowed books and due dates." }
    }
}
