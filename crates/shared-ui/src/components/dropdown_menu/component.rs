use dioxus::prelude::*;

use crate::outside_click::use_outside_click;

/// Open/closed state shared by the dropdown parts via context.
#[derive(Clone, Copy, PartialEq)]
pub struct DropdownState {
    pub open: Signal<bool>,
}

/// Click-to-open menu anchored to its trigger, used for the profile menu in
/// the shell chrome.
///
/// Dismissal paths: clicking the trigger again, selecting an item, or any
/// pointer-down outside the menu subtree. The outside listener only exists
/// while the menu is open and is released on close and on unmount.
#[component]
pub fn DropdownMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut open = use_signal(|| false);
    use_context_provider(|| DropdownState { open });

    let is_open = use_memo(move || open());
    let close = use_callback(move |_: ()| open.set(false));
    use_outside_click(is_open, ".dropdown-menu", close);

    let base = vec![
        Attribute::new("class", "dropdown-menu", None, false),
        Attribute::new(
            "data-state",
            if is_open() { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Button that toggles the menu.
#[component]
pub fn DropdownMenuTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_context::<DropdownState>();

    let base = vec![Attribute::new("class", "dropdown-menu-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-haspopup": "menu",
            "aria-expanded": if (state.open)() { "true" } else { "false" },
            onclick: move |_| {
                let mut open = state.open;
                let current = *open.peek();
                open.set(!current);
            },
            ..merged,
            {children}
        }
    }
}

/// Floating panel, rendered only while the menu is open.
#[component]
pub fn DropdownMenuContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_context::<DropdownState>();

    let base = vec![Attribute::new("class", "dropdown-menu-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if (state.open)() {
            div {
                role: "menu",
                ..merged,
                {children}
            }
        }
    }
}

/// Selectable row inside the menu. Selecting closes the menu first.
#[component]
pub fn DropdownMenuItem(
    #[props(default)] on_select: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_context::<DropdownState>();

    let base = vec![Attribute::new("class", "dropdown-menu-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            role: "menuitem",
            onclick: move |_| {
                let mut open = state.open;
                open.set(false);
                on_select.call(());
            },
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuSeparator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "dropdown-menu-separator", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            role: "separator",
            ..merged,
        }
    }
}
