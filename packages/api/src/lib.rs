//! # API crate — data layer for the feed client
//!
//! Everything the views need to talk to the remote REST API lives here: the
//! wire models, the error type, and the client itself.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types (`Post`, `Comment`, `User`, …) deserialized straight off the API |
//! | [`client`] | The [`ApiClient`] trait and the reqwest-backed [`HttpClient`] |
//! | [`error`] | [`ApiError`], the one failure type every call returns |
//!
//! The [`ApiClient`] trait exists so the UI's state logic can be exercised
//! against [`MemoryClient`] in tests without a network. The real client is
//! cloneable and is shared across views through Dioxus context.

pub mod client;
pub mod models;

mod error;
pub use error::ApiError;

mod memory;
pub use memory::MemoryClient;

pub use client::{ApiClient, HttpClient};
pub use models::{Address, Comment, Company, Geo, NewPost, Post, User};

/// Base URL of the public demo API the client is built against.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
