//! Wire models for the posts/comments/users API.
//!
//! Fields mirror the server's JSON one-to-one; anything the client does not
//! use (`userId` on posts, `email` on comments) is simply ignored during
//! deserialization. The only name that is not snake_case on the wire is
//! `catchPhrase`, mapped with a `rename`.

use serde::{Deserialize, Serialize};

/// A post in the feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned, unique.
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Body of a create-post request; also the transient form draft.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

/// A comment on one post. Read-only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub name: String,
    pub body: String,
}

/// A user's full profile record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates as the server sends them: strings, not numbers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}
