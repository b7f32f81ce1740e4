//! Text search over posts.
//!
//! A pure projection: case-insensitive substring match on post text. The store is never
//! reordered or modified.

use crate::models::Post;

/// Normalized search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// An empty term matches every post.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.is_empty() || post.text.to_lowercase().contains(&self.needle)
    }
}

/// Posts matching `term`, in store order.
pub fn matching<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    let term = SearchTerm::new(term);
    posts.iter().filter(|post| term.matches(post)).collect()
}
