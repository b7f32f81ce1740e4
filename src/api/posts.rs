//! Post API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::app::DeleteResult;
use crate::models::{CommentRequest, PostId, PublishRequest, ShareRequest};
use crate::render::FeedView;
use crate::share::ShareOutcome;
use crate::store::Answer;
use crate::AppState;

/// Delete confirmation. Anything but `confirm=true` is a decline.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// POST /api/posts - Publish a post as the current viewer.
pub async fn publish_post(
    State(state): State<AppState>,
    Json(request): Json<PublishRequest>,
) -> ApiResult<FeedView> {
    let mut app = state.feed.lock().await;
    let revision_id = app.revision_id();

    match app.publish(&request.text, request.image_url.as_deref()) {
        Ok(view) => success(view, app.revision_id()),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/posts/:id/like - Toggle the viewer's like.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<FeedView> {
    let mut app = state.feed.lock().await;
    let revision_id = app.revision_id();

    match app.toggle_like(PostId(id)) {
        Ok(view) => success(view, app.revision_id()),
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/posts/:id - Delete a post once confirmed.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<DeleteQuery>,
) -> ApiResult<DeleteResult> {
    let mut app = state.feed.lock().await;
    let result = app.delete(PostId(id), &mut Answer(params.confirm));
    success(result, app.revision_id())
}

/// POST /api/posts/:id/comments - Append a comment as the current viewer.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CommentRequest>,
) -> ApiResult<FeedView> {
    let mut app = state.feed.lock().await;
    let view = app.add_comment(PostId(id), &request.text);
    success(view, app.revision_id())
}

/// POST /api/posts/:id/share - Native share payload or fallback notification.
pub async fn share_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ShareRequest>,
) -> ApiResult<ShareOutcome> {
    let app = state.feed.lock().await;
    let revision_id = app.revision_id();

    match app.share(PostId(id), request.native_share) {
        Ok(outcome) => success(outcome, revision_id),
        Err(e) => error(e, revision_id),
    }
}
