use dioxus::prelude::*;

mod api;
mod config;
mod format_helpers;
mod routes;
mod store;

use routes::Route;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Feature flags come from the embedded config and are read by every page.
    use_context_provider(|| config::app_config().features.clone());

    rsx! {
        Router::<Route> {}
    }
}
