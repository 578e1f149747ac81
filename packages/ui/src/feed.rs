//! View state behind the feed page.
//!
//! [`FeedState`] lives in a signal owned by the feed view and is mutated
//! only through the methods below, each called from the completion path of
//! the request that produced the data. When two fetches race, the one whose
//! response is applied last determines the final state; that is accepted
//! rather than reconciled, and pinned down by a test.

use api::{Comment, Post};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    /// Every post in the feed, newest first after a successful create.
    pub posts: Vec<Post>,
    /// Comments belonging to `selected_post_id`; stale but kept while the
    /// dialog is hidden.
    pub comments: Vec<Comment>,
    pub selected_post_id: Option<u32>,
    pub comments_visible: bool,
}

impl FeedState {
    /// Replace the post list with a freshly fetched one.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Show the comments dialog for one post, replacing the prior list.
    pub fn open_comments(&mut self, post_id: u32, comments: Vec<Comment>) {
        self.comments = comments;
        self.selected_post_id = Some(post_id);
        self.comments_visible = true;
    }

    /// Hide the dialog. Comments and selection stay behind and are
    /// overwritten on the next open.
    pub fn close_comments(&mut self) {
        self.comments_visible = false;
    }

    /// Prepend a post the server just created.
    pub fn insert_post(&mut self, post: Post) {
        self.posts.insert(0, post);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiClient, MemoryClient, NewPost};

    fn post(id: u32, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            body: "body".to_string(),
        }
    }

    fn comment(id: u32, name: &str) -> Comment {
        Comment {
            id,
            name: name.to_string(),
            body: "comment body".to_string(),
        }
    }

    #[tokio::test]
    async fn created_post_lands_at_the_front() {
        let client = MemoryClient::new();
        client.insert_post(post(1, "older"));

        let mut state = FeedState::default();
        state.set_posts(client.fetch_posts().await.unwrap());

        let draft = NewPost {
            title: "fresh".to_string(),
            body: "just created".to_string(),
        };
        let created = client.create_post(&draft).await.unwrap();
        state.insert_post(created.clone());

        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.posts[0].id, created.id);
        assert_eq!(state.posts[0].title, "fresh");
        assert_eq!(state.posts[1].title, "older");
    }

    #[tokio::test]
    async fn reopening_comments_replaces_the_previous_list() {
        let client = MemoryClient::new();
        client.insert_comment(42, comment(1, "on forty-two"));
        client.insert_comment(7, comment(2, "on seven"));

        let mut state = FeedState::default();

        state.open_comments(42, client.fetch_comments(42).await.unwrap());
        assert_eq!(state.selected_post_id, Some(42));
        assert!(state.comments_visible);

        state.close_comments();
        state.open_comments(7, client.fetch_comments(7).await.unwrap());

        assert_eq!(state.selected_post_id, Some(7));
        assert!(state.comments_visible);
        assert_eq!(state.comments.len(), 1);
        assert_eq!(state.comments[0].name, "on seven");
    }

    #[tokio::test]
    async fn later_applied_response_wins_a_race() {
        let client = MemoryClient::new();
        client.insert_comment(42, comment(1, "on forty-two"));
        client.insert_comment(7, comment(2, "on seven"));

        // Both requests are in flight at once; the dialog reflects whichever
        // response lands last, with no merging.
        let for_42 = client.fetch_comments(42).await.unwrap();
        let for_7 = client.fetch_comments(7).await.unwrap();

        let mut state = FeedState::default();
        state.open_comments(42, for_42);
        state.open_comments(7, for_7);

        assert_eq!(state.selected_post_id, Some(7));
        assert_eq!(state.comments[0].name, "on seven");
    }

    #[tokio::test]
    async fn failed_fetch_keeps_prior_posts() {
        let client = MemoryClient::new();
        client.insert_post(post(1, "kept"));

        let mut state = FeedState::default();
        state.set_posts(client.fetch_posts().await.unwrap());

        client.set_offline(true);
        if let Ok(posts) = client.fetch_posts().await {
            state.set_posts(posts);
        }

        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].title, "kept");
    }

    #[test]
    fn closing_hides_but_does_not_clear() {
        let mut state = FeedState::default();
        state.open_comments(3, vec![comment(9, "kept around")]);

        state.close_comments();

        assert!(!state.comments_visible);
        assert_eq!(state.selected_post_id, Some(3));
        assert_eq!(state.comments.len(), 1);
    }
}
