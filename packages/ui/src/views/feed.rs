use dioxus::prelude::*;

use api::{ApiClient, Comment, HttpClient, NewPost, Post};

use crate::{validate, DraftErrors, FeedState};

const VIEWS_CSS: Asset = asset!("/assets/views.css");

/// Feed page: the create-post form on top, one card per post below, and
/// the comments dialog once a post's comments have been fetched.
///
/// Fetch failures are logged and leave the current state alone; the only
/// errors a user ever sees are the inline form messages.
#[component]
pub fn FeedView() -> Element {
    let api = use_context::<HttpClient>();
    let mut feed = use_signal(FeedState::default);
    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut errors = use_signal(DraftErrors::default);

    // Fetch the feed once when the view is first shown
    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.fetch_posts().await {
                Ok(posts) => feed.write().set_posts(posts),
                Err(e) => tracing::error!("Error fetching posts: {e}"),
            }
        }
    });

    let submit_api = api.clone();
    let handle_submit = move |_| {
        let draft = NewPost {
            title: title(),
            body: body(),
        };
        let checked = validate(&draft);
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(DraftErrors::default());

        let api = submit_api.clone();
        spawn(async move {
            match api.create_post(&draft).await {
                Ok(post) => {
                    feed.write().insert_post(post);
                    title.set(String::new());
                    body.set(String::new());
                }
                // The draft stays in the form so nothing typed is lost
                Err(e) => tracing::error!("Error creating post: {e}"),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "feed-page",

            div {
                class: "post-form",
                h2 { "Create a Post" }
                div {
                    class: "form-field",
                    label { r#for: "post-title", "Title" }
                    input {
                        id: "post-title",
                        r#type: "text",
                        class: if errors().title.is_some() { "form-input invalid" } else { "form-input" },
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                    if let Some(message) = errors().title {
                        small { class: "field-error", "{message}" }
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "post-body", "Body" }
                    textarea {
                        id: "post-body",
                        rows: "3",
                        class: if errors().body.is_some() { "form-input invalid" } else { "form-input" },
                        value: body(),
                        oninput: move |evt: FormEvent| body.set(evt.value()),
                    }
                    if let Some(message) = errors().body {
                        small { class: "field-error", "{message}" }
                    }
                }
                button {
                    class: "button button-primary",
                    onclick: handle_submit,
                    "Create Post"
                }
            }

            for post in feed().posts {
                PostCard {
                    key: "{post.id}",
                    post: post.clone(),
                    on_comment: {
                        let api = api.clone();
                        move |post_id: u32| {
                            let api = api.clone();
                            spawn(async move {
                                match api.fetch_comments(post_id).await {
                                    Ok(comments) => feed.write().open_comments(post_id, comments),
                                    // Dialog stays hidden, prior comments stay put
                                    Err(e) => tracing::error!("Error fetching comments: {e}"),
                                }
                            });
                        }
                    },
                }
            }

            if feed().comments_visible {
                CommentsDialog {
                    comments: feed().comments,
                    on_close: move |_| feed.write().close_comments(),
                }
            }
        }
    }
}

#[component]
fn PostCard(post: Post, on_comment: EventHandler<u32>) -> Element {
    rsx! {
        div {
            class: "post-card",
            div {
                class: "post-header",
                div { class: "avatar", "U" }
                div {
                    strong { "Username" }
                    p { class: "post-meta", "Post ID: {post.id}" }
                }
            }
            div {
                class: "post-content",
                h3 { "{post.title}" }
                p { "{post.body}" }
            }
            div {
                class: "post-footer",
                button { class: "button", "Like" }
                button {
                    class: "button",
                    onclick: move |_| on_comment.call(post.id),
                    "Comment"
                }
                button { class: "button", "Share" }
            }
        }
    }
}

/// Comments overlay for the selected post. Clicking outside the card or
/// on the header button closes it.
#[component]
fn CommentsDialog(comments: Vec<Comment>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { "Comments" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                div {
                    class: "comment-section",
                    for comment in &comments {
                        div {
                            key: "{comment.id}",
                            class: "comment",
                            h4 { "{comment.name}" }
                            p { "{comment.body}" }
                        }
                    }
                }
            }
        }
    }
}
