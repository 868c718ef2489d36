use dioxus::prelude::*;

/// Header bar across the top of the shell content region.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "navbar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            ..merged,
            {children}
        }
    }
}

/// Right-aligned spacer pushing subsequent navbar items to the edge.
#[component]
pub fn NavbarSpacer() -> Element {
    rsx! {
        div { class: "navbar-spacer" }
    }
}
