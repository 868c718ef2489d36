use dioxus::prelude::*;
use shared_types::{SchoolRole, ALL_ROLES};
use shared_ui::components::*;

use crate::api;
use crate::routes::{dashboard_route, Route};
use crate::session::use_session;
use crate::storage::BrowserStore;

/// Landing page: one card per portal. Picking a card preselects the role on
/// the login form; the role the backend returns is what actually decides
/// where login lands.
#[component]
pub fn PortalSelect() -> Element {
    let nav = navigator();

    let cards = ALL_ROLES.iter().map(|role| {
        let key = role.as_str();
        rsx! {
            PortalCard {
                key: "{key}",
                role: *role,
                on_select: move |role: SchoolRole| {
                    nav.push(Route::Login {
                        role: role.as_str().to_string(),
                    });
                },
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            div { class: "auth-panel",
                h1 { class: "auth-brand", "Acadix" }
                p { class: "auth-tagline", "Select your portal to continue" }
                div { class: "portal-grid",
                    {cards}
                }
            }
        }
    }
}

#[component]
fn PortalCard(role: SchoolRole, on_select: EventHandler<SchoolRole>) -> Element {
    rsx! {
        button {
            class: "portal-card",
            r#type: "button",
            onclick: move |_| on_select.call(role),
            span { class: "portal-card-title", {role.display_name()} }
        }
    }
}

/// Credential form. Submitting disables the form, calls the backend, and on
/// success persists the session and navigates to the dashboard of the role
/// the backend returned.
#[component]
pub fn Login(role: String) -> Element {
    let picked = SchoolRole::from_key(&role);
    let mut session = use_session();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *submitting.peek() {
            return;
        }
        submitting.set(true);
        error_msg.set(None);

        let email = email.peek().clone();
        let password = password.peek().clone();
        spawn(async move {
            match api::login(email, password).await {
                Ok(response) => {
                    let role = response.user.role;
                    session.establish(response, &BrowserStore);
                    nav.push(dashboard_route(role));
                }
                Err(err) => {
                    tracing::warn!("login rejected: {err}");
                    error_msg.set(Some(err.message));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign in" }
                    CardDescription { {format!("{} portal", picked.display_name())} }
                }
                CardContent {
                    form { class: "auth-form", onsubmit: submit,
                        if let Some(message) = error_msg() {
                            div { class: "auth-error", role: "alert", {message} }
                        }
                        Label { html_for: "email", "Email" }
                        Input {
                            id: "email",
                            input_type: "email",
                            value: email(),
                            placeholder: "you@school.example",
                            disabled: submitting(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Label { html_for: "password", "Password" }
                        Input {
                            id: "password",
                            input_type: "password",
                            value: password(),
                            disabled: submitting(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        button {
                            class: "auth-submit",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Signing in…" } else { "Sign in" }
                        }
                    }
                    button {
                        class: "auth-back",
                        r#type: "button",
                        onclick: move |_| {
                            nav.push(Route::PortalSelect {});
                        },
                        "Choose a different portal"
                    }
                }
            }
        }
    }
}
