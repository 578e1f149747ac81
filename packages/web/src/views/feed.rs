use dioxus::prelude::*;

use ui::views::FeedView;

#[component]
pub fn Feed() -> Element {
    rsx! {
        FeedView {}
    }
}
