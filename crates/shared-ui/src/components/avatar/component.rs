use dioxus::prelude::*;

/// Circular user avatar. Renders [`AvatarImage`] children when a picture is
/// available and [`AvatarFallback`] initials otherwise; callers decide which
/// to include.
#[component]
pub fn Avatar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "avatar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn AvatarImage(
    src: String,
    #[props(default)] alt: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "avatar-image", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        img {
            src: src,
            alt: alt,
            ..merged,
        }
    }
}

#[component]
pub fn AvatarFallback(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "avatar-fallback", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            ..merged,
            {children}
        }
    }
}
