//! The [`ApiClient`] trait and its HTTP implementation.
//!
//! All four endpoints the app uses go through this trait, so the view-model
//! logic can run against the in-memory backend ([`crate::MemoryClient`]) in
//! tests. [`HttpClient`] is the real thing: a thin wrapper over a shared
//! `reqwest::Client` with the base URL baked in.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{Comment, NewPost, Post, User};
use crate::DEFAULT_BASE_URL;

/// Async interface to the posts/comments/users REST API.
pub trait ApiClient {
    /// `GET /posts` — the whole feed, in server order.
    fn fetch_posts(&self) -> impl std::future::Future<Output = Result<Vec<Post>, ApiError>>;

    /// `GET /posts/{id}/comments` — all comments for one post.
    fn fetch_comments(
        &self,
        post_id: u32,
    ) -> impl std::future::Future<Output = Result<Vec<Comment>, ApiError>>;

    /// `POST /posts` — create a post; the server assigns the id and echoes
    /// the rest back.
    fn create_post(
        &self,
        draft: &NewPost,
    ) -> impl std::future::Future<Output = Result<Post, ApiError>>;

    /// `GET /users/{id}` — one user's full record. The id is an opaque
    /// route parameter forwarded verbatim; an id the server does not know
    /// (numeric or not) fails remotely, not here.
    fn fetch_user(&self, id: &str) -> impl std::future::Future<Output = Result<User, ApiError>>;
}

/// HTTP-backed [`ApiClient`] talking to the public demo API.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(resp.json().await?)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient for HttpClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json("/posts").await
    }

    async fn fetch_comments(&self, post_id: u32) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("/posts/{post_id}/comments")).await
    }

    async fn create_post(&self, draft: &NewPost) -> Result<Post, ApiError> {
        let url = format!("{}/posts", self.base_url);
        let resp = self.http.post(&url).json(draft).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn fetch_user(&self, id: &str) -> Result<User, ApiError> {
        self.get_json(&format!("/users/{id}")).await
    }
}
