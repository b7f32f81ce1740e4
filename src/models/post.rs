//! Post and comment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post identifier, a millisecond clock reading taken at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reply attached to a post. Identified only by its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A single feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub is_liked: bool,
    /// Append-only, oldest first
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Flip the viewer's like state, keeping the counter in lockstep.
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
            self.is_liked = false;
        } else {
            self.likes += 1;
            self.is_liked = true;
        }
    }
}

/// Request body for publishing a new post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request body for adding a comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

/// Request body for sharing a post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    /// Whether the client has a native share facility
    #[serde(default)]
    pub native_share: bool,
}
