use dioxus::prelude::*;

use crate::icons::{FaBox, FaPalette, FaUser};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/views.css");

/// Top menu bar: Feed, Profile, and the theme toggle.
///
/// Navigation is the shell's job; the bar only raises events.
#[component]
pub fn Navbar(
    on_feed: EventHandler<()>,
    on_profile: EventHandler<()>,
    on_theme: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "navbar",
            button {
                class: "navbar-item",
                onclick: move |_| on_feed.call(()),
                Icon { icon: FaBox, width: 14, height: 14 }
                span { "Feed" }
            }
            button {
                class: "navbar-item",
                onclick: move |_| on_profile.call(()),
                Icon { icon: FaUser, width: 14, height: 14 }
                span { "Profile" }
            }
            button {
                class: "navbar-item",
                onclick: move |_| on_theme.call(()),
                Icon { icon: FaPalette, width: 14, height: 14 }
                span { "Theme" }
            }
        }
    }
}
