use dioxus::prelude::*;

use ui::{use_theme, Navbar};

use crate::Route;

/// Layout shared by both routes: the menu bar above the active view.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let mut theme = use_theme();

    rsx! {
        header {
            Navbar {
                on_feed: move |_| { nav.push(Route::Feed {}); },
                // The profile entry points at a fixed demo user
                on_profile: move |_| { nav.push(Route::Profile { id: "1".to_string() }); },
                on_theme: move |_| {
                    let next = theme().toggle();
                    theme.set(next);
                },
            }
        }
        main {
            Outlet::<Route> {}
        }
    }
}
