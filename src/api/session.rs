//! Session API endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::models::{LoginRequest, SignupNotice, SignupRequest, User};
use crate::AppState;

/// GET /api/session - Current viewer, if any.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<Option<User>> {
    let app = state.feed.lock().await;
    success(app.current_user().cloned(), app.revision_id())
}

/// POST /api/session/login - Log in with any non-empty email and password.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<User> {
    let mut app = state.feed.lock().await;
    let revision_id = app.revision_id();

    match app.login(&request.email, &request.password) {
        Ok(user) => success(user, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/session/logout - Log out. Posts are kept.
pub async fn logout(State(state): State<AppState>) -> ApiResult<()> {
    let mut app = state.feed.lock().await;
    app.logout();
    success((), app.revision_id())
}

/// POST /api/session/signup - Cosmetic signup, returns the login pre-fill.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<SignupNotice> {
    let app = state.feed.lock().await;
    let notice = app.signup(&request.name, &request.email, &request.password);
    success(notice, app.revision_id())
}
