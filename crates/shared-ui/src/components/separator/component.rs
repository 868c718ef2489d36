use dioxus::prelude::*;

/// Thin rule between content regions.
#[component]
pub fn Separator(
    #[props(default = true)] horizontal: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "separator", None, false),
        Attribute::new(
            "data-orientation",
            if horizontal { "horizontal" } else { "vertical" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "separator",
            ..merged,
        }
    }
}
