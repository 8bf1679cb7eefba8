// API type definitions module
// JSON shapes returned by the blog endpoints

use serde::Serialize;

use crate::content::{Metadata, Post};
use crate::site::display_name;

/// One entry of `GET /api/posts`
#[derive(Debug, Serialize)]
pub struct PostSummary {
    pub id: String,
    /// Link label: identifier with hyphens shown as spaces
    pub name: String,
    pub url: String,
}

impl PostSummary {
    pub fn new(id: String) -> Self {
        Self {
            name: display_name(&id),
            url: format!("/blog/{}", urlencoding::encode(&id)),
            id,
        }
    }
}

/// `GET /api/posts/<id>`
#[derive(Debug, Serialize)]
pub struct PostDetail {
    pub id: String,
    pub title: String,
    pub date: String,
    pub metadata: Metadata,
    /// Sanitized HTML body
    pub html: String,
}

impl From<Post> for PostDetail {
    fn from(post: Post) -> Self {
        Self {
            title: post.title().to_string(),
            date: post.date().to_string(),
            id: post.id,
            metadata: post.metadata,
            html: post.html,
        }
    }
}
