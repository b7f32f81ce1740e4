//! Application shell.
//!
//! `FeedApp` owns the feed store and the session gate. Each user action is one method:
//! it mutates state and hands back a freshly rendered view.

use serde::Serialize;

use crate::auth::SessionGate;
use crate::errors::AppError;
use crate::models::{Post, PostId, SignupNotice, User};
use crate::render::{render_feed, FeedView};
use crate::share::{self, ShareOutcome};
use crate::store::{Confirm, DeleteOutcome, FeedStore};

/// Outcome of a delete action together with the redrawn feed.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResult {
    pub deleted: bool,
    pub view: FeedView,
}

pub struct FeedApp {
    store: FeedStore,
    session: SessionGate,
    page_url: String,
}

impl FeedApp {
    pub fn new(posts: Vec<Post>, page_url: impl Into<String>) -> Self {
        Self {
            store: FeedStore::with_posts(posts),
            session: SessionGate::default(),
            page_url: page_url.into(),
        }
    }

    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    pub fn revision_id(&self) -> u64 {
        self.store.revision_id()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    fn require_user(&self) -> Result<&User, AppError> {
        self.session
            .current_user()
            .ok_or_else(|| AppError::Unauthorized("Please log in first.".to_string()))
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        self.session.login(email, password)
    }

    /// Leaves every post in place.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn signup(&self, name: &str, email: &str, password: &str) -> SignupNotice {
        self.session.signup(name, email, password)
    }

    /// Render the feed, optionally narrowed by a search term.
    pub fn view(&self, filter: Option<&str>) -> FeedView {
        let filter = filter.filter(|term| !term.is_empty());
        let posts = self.store.search(filter.unwrap_or(""));
        render_feed(&posts, filter, self.session.current_user())
    }

    pub fn publish(&mut self, text: &str, image_url: Option<&str>) -> Result<FeedView, AppError> {
        let author = self.require_user()?.name.clone();
        let post = self.store.publish(&author, text, image_url)?;
        tracing::info!("Post {} published by {}", post.id, post.author);
        Ok(self.view(None))
    }

    pub fn toggle_like(&mut self, id: PostId) -> Result<FeedView, AppError> {
        match self.store.toggle_like(id) {
            Some(post) => {
                tracing::debug!("Post {} liked={} likes={}", id, post.is_liked, post.likes);
                Ok(self.view(None))
            }
            None => Err(AppError::NotFound(format!("Post {} not found", id))),
        }
    }

    pub fn delete(&mut self, id: PostId, confirmation: &mut impl Confirm) -> DeleteResult {
        let deleted = match self.store.delete(id, confirmation) {
            DeleteOutcome::Deleted(post) => {
                tracing::info!("Post {} deleted", post.id);
                true
            }
            DeleteOutcome::Declined => {
                tracing::debug!("Delete of post {} declined", id);
                false
            }
            DeleteOutcome::NotFound => false,
        };

        DeleteResult {
            deleted,
            view: self.view(None),
        }
    }

    /// Blank comments and comments without a session are dropped without complaint.
    pub fn add_comment(&mut self, id: PostId, text: &str) -> FeedView {
        let viewer = self.session.current_user();
        if self.store.add_comment(id, viewer, text).is_some() {
            tracing::debug!("Comment added to post {}", id);
        }
        self.view(None)
    }

    pub fn share(&self, id: PostId, native_supported: bool) -> Result<ShareOutcome, AppError> {
        let post = self
            .store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;
        Ok(share::share(post, native_supported, &self.page_url))
    }
}
