//! Search API endpoints.

use axum::extract::{Query, State};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::render::FeedView;
use crate::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search term; empty matches everything.
    #[serde(default)]
    pub q: String,
}

/// GET /api/search - Case-insensitive substring search on post text.
pub async fn search_posts(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<FeedView> {
    let app = state.feed.lock().await;
    let view = app.view(Some(&params.q));
    tracing::debug!("Search {:?} matched {} posts", params.q, view.total);

    success(view, app.revision_id())
}
