//! Data models for the feed service.
//!
//! Field names serialize in camelCase to match the browser client.

mod post;
mod session;

pub use post::*;
pub use session::*;
