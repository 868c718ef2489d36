use dioxus::prelude::*;

/// Form field label.
#[component]
pub fn Label(
    #[props(default)] html_for: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "label", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            r#for: html_for,
            ..merged,
            {children}
        }
    }
}
