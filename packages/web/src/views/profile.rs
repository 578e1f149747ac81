use dioxus::prelude::*;

use ui::views::ProfileView;

#[component]
pub fn Profile(id: String) -> Element {
    rsx! {
        ProfileView { user_id: id }
    }
}
