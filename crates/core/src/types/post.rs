//! Community feed post and comment types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::{CommentId, PostId, UserId};
use crate::types::product::ImageUpload;

/// A post in the community feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub likes: i64,
    #[serde(default)]
    pub liked_by_me: bool,
    pub created_at: DateTime<Utc>,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for publishing a new post (multipart).
#[derive(Debug, Clone)]
pub struct NewPost {
    pub content: String,
    pub image: Option<ImageUpload>,
}

/// Payload for posting a comment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
}
