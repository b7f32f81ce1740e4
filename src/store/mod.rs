//! In-memory feed store.
//!
//! The store is the single source of truth for posts. It lives for the lifetime of the
//! process and is never persisted.

mod seed;

pub use seed::seed_posts;

use chrono::{DateTime, Utc};

use crate::errors::AppError;
use crate::models::{Comment, Post, PostId, User};
use crate::search;

/// Prompt shown before a post is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";

/// Capability the caller must provide before a delete may proceed.
pub trait Confirm {
    /// Ask the user a yes/no question.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A confirmation answered up front, e.g. from a request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Post),
    Declined,
    NotFound,
}

/// Ordered collection of posts, oldest first.
#[derive(Debug, Default)]
pub struct FeedStore {
    posts: Vec<Post>,
    last_id: i64,
    revision_id: u64,
}

impl FeedStore {
    /// Build a store from existing posts, keeping their order.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let last_id = posts.iter().map(|p| p.id.0).max().unwrap_or(0);
        Self {
            posts,
            last_id,
            revision_id: 0,
        }
    }

    /// Monotonic counter bumped on every mutation.
    pub fn revision_id(&self) -> u64 {
        self.revision_id
    }

    /// All posts in creation order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    fn bump_revision(&mut self) {
        self.revision_id += 1;
    }

    /// Ids come from the clock but must strictly increase within a session.
    fn next_id(&mut self, now: DateTime<Utc>) -> PostId {
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        PostId(id)
    }

    /// Publish a new post authored by `author`.
    pub fn publish(
        &mut self,
        author: &str,
        text: &str,
        image_url: Option<&str>,
    ) -> Result<Post, AppError> {
        self.publish_at(author, text, image_url, Utc::now())
    }

    pub(crate) fn publish_at(
        &mut self,
        author: &str,
        text: &str,
        image_url: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Post, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation(
                "Post content cannot be empty!".to_string(),
            ));
        }

        let image_url = image_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let post = Post {
            id: self.next_id(now),
            author: author.to_string(),
            text: text.to_string(),
            image_url,
            timestamp: now,
            likes: 0,
            is_liked: false,
            comments: Vec::new(),
        };

        self.posts.push(post.clone());
        self.bump_revision();
        tracing::debug!("Published post {} by {}", post.id, post.author);
        Ok(post)
    }

    /// Flip the like state of a post. Unknown ids are ignored.
    pub fn toggle_like(&mut self, id: PostId) -> Option<Post> {
        let post = self.get_mut(id)?;
        post.toggle_like();
        let post = post.clone();
        self.bump_revision();
        Some(post)
    }

    /// Delete a post once the caller has confirmed.
    pub fn delete(&mut self, id: PostId, confirmation: &mut impl Confirm) -> DeleteOutcome {
        if !confirmation.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Declined;
        }

        match self.posts.iter().position(|p| p.id == id) {
            Some(index) => {
                let post = self.posts.remove(index);
                self.bump_revision();
                tracing::debug!("Deleted post {}", id);
                DeleteOutcome::Deleted(post)
            }
            None => DeleteOutcome::NotFound,
        }
    }

    /// Append a comment from the current viewer.
    ///
    /// Silently does nothing when the text is blank, nobody is logged in, or the post
    /// does not exist.
    pub fn add_comment(&mut self, id: PostId, viewer: Option<&User>, text: &str) -> Option<Comment> {
        self.add_comment_at(id, viewer, text, Utc::now())
    }

    pub(crate) fn add_comment_at(
        &mut self,
        id: PostId,
        viewer: Option<&User>,
        text: &str,
        now: DateTime<Utc>,
    ) -> Option<Comment> {
        let text = text.trim();
        let viewer = viewer?;
        if text.is_empty() {
            return None;
        }

        let post = self.get_mut(id)?;
        let comment = Comment {
            author: viewer.name.clone(),
            text: text.to_string(),
            timestamp: now,
        };
        post.comments.push(comment.clone());
        self.bump_revision();
        Some(comment)
    }

    /// Posts whose text contains `term`, ignoring case. Order is preserved.
    pub fn search(&self, term: &str) -> Vec<&Post> {
        search::matching(&self.posts, term)
    }
}
