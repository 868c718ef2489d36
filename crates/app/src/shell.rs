use dioxus::prelude::*;
use shared_types::{resolve_active, ExpansionState, NavNode};
use shared_ui::components::*;
use shared_ui::theme::use_theme;

use crate::api;
use crate::nav::RoleShell;
use crate::routes::Route;
use crate::session::use_session;
use crate::storage::BrowserStore;

/// The chrome every authenticated page renders inside: sidebar with the
/// role's nav tree, top bar with the page title and profile menu, and an
/// outlet for the routed page.
///
/// Expansion state lives here, not in the tree renderer, so it survives
/// navigation within the role. Route changes reveal the active branch's
/// ancestors additively; branches the user opened by hand stay open.
#[component]
pub fn AppShell(shell: RoleShell) -> Element {
    let route_path = use_route::<Route>().to_string();
    let mut expansion = use_signal(ExpansionState::new);
    let session = use_session();
    let mut theme = use_theme();
    let nav = navigator();

    let auto_expand_tree = shell.tree.clone();
    use_effect(use_reactive!(|(route_path,)| {
        let trail = resolve_active(&auto_expand_tree, &route_path);
        if !trail.ancestors.is_empty() {
            expansion.write().reveal(trail.ancestors);
        }
    }));

    let title = page_title(&shell.tree, &route_path)
        .unwrap_or_else(|| shell.role.display_name().to_string());
    let user = session.user();

    let sign_out = move |_| {
        let mut session = session;
        if let Some(token) = session.access_token() {
            spawn(async move {
                if let Err(err) = api::logout(&token).await {
                    tracing::warn!("remote logout failed, clearing local session anyway: {err}");
                }
            });
        }
        session.clear(&BrowserStore);
        nav.push(Route::PortalSelect {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        SidebarProvider {
            div { class: "app-shell",
                Sidebar {
                    SidebarHeader {
                        span { class: "app-brand", {shell.brand} }
                    }
                    SidebarContent {
                        SidebarTree {
                            items: shell.tree.clone(),
                            current_path: route_path.clone(),
                            expansion,
                            on_navigate: move |path: String| {
                                nav.push(path.as_str());
                            },
                        }
                    }
                    SidebarSeparator {}
                    SidebarFooter {
                        Badge { variant: BadgeVariant::Secondary, {shell.role.display_name()} }
                    }
                }
                SidebarInset {
                    Navbar {
                        SidebarTrigger { "\u{2630}" }
                        Separator { horizontal: false }
                        h1 { class: "navbar-title", {title} }
                        NavbarSpacer {}
                        Switch {
                            checked: theme.current().is_dark(),
                            on_checked_change: move |_| theme.toggle(),
                            SwitchThumb {}
                        }
                        if let Some(user) = user {
                            ProfileMenu { user, on_sign_out: sign_out }
                        }
                    }
                    div { class: "page-body",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}

/// Avatar-triggered dropdown in the top-right corner. Closes on outside
/// click, on reopening via the trigger, and on item selection.
#[component]
fn ProfileMenu(user: shared_types::AuthUser, on_sign_out: EventHandler<()>) -> Element {
    let initials = user.initials();

    rsx! {
        DropdownMenu {
            DropdownMenuTrigger {
                Avatar {
                    if let Some(url) = user.avatar_url.clone() {
                        AvatarImage { src: url, alt: user.display_name.clone() }
                    } else {
                        AvatarFallback { {initials} }
                    }
                }
            }
            DropdownMenuContent {
                div { class: "profile-menu-identity",
                    span { class: "profile-menu-name", {user.display_name.clone()} }
                    span { class: "profile-menu-email", {user.email.clone()} }
                }
                DropdownMenuSeparator {}
                DropdownMenuItem {
                    on_select: move |_| on_sign_out.call(()),
                    "Sign Out"
                }
            }
        }
    }
}

/// Placeholder body for routed pages that are pure navigation targets.
#[component]
pub fn PagePlaceholder(heading: String, #[props(default)] blurb: String) -> Element {
    rsx! {
        PageHeader {
            PageTitle { {heading.clone()} }
        }
        Card {
            CardContent {
                p { {blurb} }
            }
        }
    }
}

/// Label of the nav leaf the current path resolves to, if any.
fn page_title(tree: &[NavNode], current_path: &str) -> Option<String> {
    let trail = resolve_active(tree, current_path);
    let leaf = trail.leaf?;
    find_label(tree, &leaf)
}

fn find_label(nodes: &[NavNode], id: &str) -> Option<String> {
    for node in nodes {
        if node.id() == id {
            return Some(node.label().to_string());
        }
        if let Some(found) = find_label(node.children(), id) {
            return Some(found);
        }
    }
    None
}
