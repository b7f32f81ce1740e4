//! Feed view endpoints.

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::render::FeedView;
use crate::AppState;

/// Optional live filter.
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: u64,
}

/// GET /api/feed - Render the feed, newest first.
pub async fn get_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedQuery>,
) -> ApiResult<FeedView> {
    let app = state.feed.lock().await;
    success(app.view(params.q.as_deref()), app.revision_id())
}

/// GET /api/feed/revision - Current revision, for cheap staleness checks.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_id = state.feed.lock().await.revision_id();
    success(RevisionInfo { revision_id }, revision_id)
}
