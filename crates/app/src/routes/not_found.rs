use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let nav = navigator();

    rsx! {
        div { class: "not-found-page",
            h1 { "Page not found" }
            p { {format!("No page exists at {path}.")} }
            button {
                r#type: "button",
                onclick: move |_| {
                    nav.push(Route::PortalSelect {});
                },
                "Back to start"
            }
        }
    }
}
