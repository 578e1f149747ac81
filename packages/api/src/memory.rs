use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Comment, NewPost, Post, User};

/// In-memory ApiClient for testing.
///
/// Seed it with posts, per-post comments, and users; flip `set_offline` to
/// make every call fail the way a dropped connection would.
#[derive(Clone, Debug, Default)]
pub struct MemoryClient {
    posts: Arc<Mutex<Vec<Post>>>,
    comments: Arc<Mutex<HashMap<u32, Vec<Comment>>>>,
    users: Arc<Mutex<HashMap<u32, User>>>,
    offline: Arc<Mutex<bool>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_post(&self, post: Post) {
        self.posts.lock().unwrap().push(post);
    }

    pub fn insert_comment(&self, post_id: u32, comment: Comment) {
        self.comments
            .lock()
            .unwrap()
            .entry(post_id)
            .or_default()
            .push(comment);
    }

    pub fn insert_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    /// Fail every call with [`ApiError::Network`] until switched back.
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if *self.offline.lock().unwrap() {
            Err(ApiError::Network("offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ApiClient for MemoryClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.check_online()?;
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn fetch_comments(&self, post_id: u32) -> Result<Vec<Comment>, ApiError> {
        self.check_online()?;
        // The remote API answers an unknown post id with an empty list
        Ok(self
            .comments
            .lock()
            .unwrap()
            .get(&post_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_post(&self, draft: &NewPost) -> Result<Post, ApiError> {
        self.check_online()?;
        let mut posts = self.posts.lock().unwrap();
        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post = Post {
            id,
            title: draft.title.clone(),
            body: draft.body.clone(),
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn fetch_user(&self, id: &str) -> Result<User, ApiError> {
        self.check_online()?;
        id.parse::<u32>()
            .ok()
            .and_then(|id| self.users.lock().unwrap().get(&id).cloned())
            .ok_or_else(|| ApiError::Status {
                url: format!("/users/{id}"),
                status: 404,
            })
    }
}
