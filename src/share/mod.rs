//! Share action.
//!
//! The host never talks to a share facility itself. It hands the client either a payload
//! for the platform's native share sheet or a plain notification to show instead.

use serde::Serialize;

use crate::models::Post;

pub const SHARE_TITLE: &str = "Check out this post!";

/// Payload for a native share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ShareOutcome {
    Native(SharePayload),
    Fallback { message: String },
}

pub fn share(post: &Post, native_supported: bool, page_url: &str) -> ShareOutcome {
    if native_supported {
        ShareOutcome::Native(SharePayload {
            title: SHARE_TITLE.to_string(),
            text: format!("\"{}\" - Shared from Mini Social App", post.text),
            url: page_url.to_string(),
        })
    } else {
        ShareOutcome::Fallback {
            message: format!(
                "Sharing not supported in this browser. Post content: \"{}\"",
                post.text
            ),
        }
    }
}
