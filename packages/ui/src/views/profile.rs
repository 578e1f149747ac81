use dioxus::prelude::*;

use api::{ApiClient, HttpClient, User};

const VIEWS_CSS: Asset = asset!("/assets/views.css");

/// Profile page for a single user, keyed by the raw route id.
///
/// The id goes to the API verbatim. While no record has arrived the view
/// shows its loading placeholder, and a failed fetch leaves it there; once
/// a record is in, a newer navigation keeps the old card on screen until
/// its own fetch resolves.
#[component]
pub fn ProfileView(user_id: String) -> Element {
    // Track the route param in a signal so use_resource re-runs on change
    let mut id_signal = use_signal(|| user_id.clone());
    if *id_signal.peek() != user_id {
        id_signal.set(user_id.clone());
    }

    let api = use_context::<HttpClient>();
    let mut user = use_signal(|| Option::<User>::None);

    let _loader = use_resource(move || {
        let id = id_signal();
        let api = api.clone();
        async move {
            match api.fetch_user(&id).await {
                Ok(fetched) => user.set(Some(fetched)),
                Err(e) => tracing::error!("Error fetching user: {e}"),
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "profile-page",
            if let Some(user) = user() {
                ProfileCard { user }
            } else {
                div {
                    class: "view-placeholder",
                    h2 { "Loading..." }
                }
            }
        }
    }
}

#[component]
fn ProfileCard(user: User) -> Element {
    let initial: String = user.name.chars().take(1).collect();

    rsx! {
        div {
            class: "profile-card",
            div {
                class: "profile-header",
                div { class: "avatar", "{initial}" }
                div {
                    strong { "{user.name}" }
                    p { class: "post-meta", "@{user.username}" }
                }
            }
            p { strong { "Email: " } "{user.email}" }
            p { strong { "Phone: " } "{user.phone}" }
            p { strong { "Website: " } "{user.website}" }
            p {
                strong { "Address: " }
                "{user.address.suite}, {user.address.street}, {user.address.city}, {user.address.zipcode}"
            }
            p { strong { "Company: " } "{user.company.name}" }
            p { strong { "Catch Phrase: " } "{user.company.catch_phrase}" }
            p { strong { "Business: " } "{user.company.bs}" }
        }
    }
}
