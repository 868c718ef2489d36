use dioxus::prelude::*;

/// Two-state toggle, used for the dark-mode switch in the sidebar footer.
#[component]
pub fn Switch(
    #[props(default = false)] checked: bool,
    #[props(default)] on_checked_change: EventHandler<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "switch", None, false),
        Attribute::new(
            "data-state",
            if checked { "checked" } else { "unchecked" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            role: "switch",
            "aria-checked": if checked { "true" } else { "false" },
            onclick: move |_| on_checked_change.call(!checked),
            ..merged,
            {children}
        }
    }
}

/// Sliding knob inside a [`Switch`].
#[component]
pub fn SwitchThumb(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "switch-thumb", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            ..merged,
        }
    }
}
