//! Feed renderer.
//!
//! Turns posts into a declarative [`FeedView`]. The view is always rebuilt from scratch;
//! the client reconciles it onto whatever display surface it owns.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Comment, Post, PostId, User};

const LIKED_ICON: &str = "❤️";
const UNLIKED_ICON: &str = "🤍";

/// Display format for post timestamps, e.g. `1/2/2023, 12:30:00 PM`.
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// The whole visible feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub total: usize,
    /// Newest first
    pub posts: Vec<PostView>,
}

/// One post card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: PostId,
    pub author: String,
    pub posted_at: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
    pub like_button: LikeButton,
    pub comment_toggle: CommentToggle,
    pub share: ActionButton,
    pub delete: DeleteButton,
    pub comments: CommentSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeButton {
    pub liked: bool,
    pub icon: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentToggle {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteButton {
    pub label: String,
    pub requires_confirmation: bool,
}

/// Collapsible comment list plus its submission form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSection {
    pub collapsed: bool,
    /// Oldest first
    pub items: Vec<CommentView>,
    pub form: CommentForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentForm {
    pub placeholder: String,
    pub submit_label: String,
}

/// Formats in UTC rather than the viewer's local zone; the server has no client locale.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Render posts given in creation order (already filtered by the caller).
pub fn render_feed(posts: &[&Post], filter: Option<&str>, viewer: Option<&User>) -> FeedView {
    FeedView {
        welcome: viewer.map(|user| format!("Welcome, {}!", user.name)),
        filter: filter.map(str::to_string),
        total: posts.len(),
        posts: posts.iter().rev().map(|post| render_post(post)).collect(),
    }
}

pub fn render_post(post: &Post) -> PostView {
    PostView {
        id: post.id,
        author: post.author.clone(),
        posted_at: format_timestamp(&post.timestamp),
        text: post.text.clone(),
        image: post.image_url.as_ref().map(|src| ImageView {
            src: src.clone(),
            alt: "Post Image".to_string(),
        }),
        like_button: LikeButton {
            liked: post.is_liked,
            icon: if post.is_liked { LIKED_ICON } else { UNLIKED_ICON }.to_string(),
            count: post.likes,
        },
        comment_toggle: CommentToggle {
            label: format!("💬 Comment ({})", post.comments.len()),
            count: post.comments.len(),
        },
        share: ActionButton {
            label: "Share 🔗".to_string(),
        },
        delete: DeleteButton {
            label: "Delete Post".to_string(),
            requires_confirmation: true,
        },
        comments: CommentSection {
            collapsed: true,
            items: post.comments.iter().map(render_comment).collect(),
            form: CommentForm {
                placeholder: "Write a comment...".to_string(),
                submit_label: "Add".to_string(),
            },
        },
    }
}

fn render_comment(comment: &Comment) -> CommentView {
    CommentView {
        author: comment.author.clone(),
        text: comment.text.clone(),
    }
}
