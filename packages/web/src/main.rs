use dioxus::prelude::*;

use api::HttpClient;
use ui::{apply_theme, Theme, ThemeSignal};
use views::{Feed, Profile, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Feed {},
        #[route("/profile/:id")]
        Profile { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One HTTP client for the whole app, shared through context
    use_context_provider(HttpClient::new);

    // Theme context: styling only, reset on reload
    let theme: ThemeSignal = use_context_provider(|| Signal::new(Theme::default()));
    use_effect(move || apply_theme(theme()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
