use dioxus::prelude::*;

mod api;
mod nav;
mod routes;
mod session;
mod shell;
mod storage;

use routes::Route;
use session::SessionState;
use shared_ui::theme::ThemeStore;
use storage::BrowserStore;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Theme preference: persisted value, else OS preference, else light.
    // Provided once so every toggle goes through the same store.
    let theme = use_context_provider(|| ThemeStore::new(ThemeStore::load()));
    use_effect(move || theme.apply());

    // Session restore is an explicit init step: storage is read once here,
    // before the first routed render, so SessionGate never sees a
    // half-restored state.
    use_context_provider(|| SessionState::restore(&BrowserStore));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/theme-base.css") }
        Router::<Route> {}
    }
}
