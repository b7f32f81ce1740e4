//! Session gate.
//!
//! A two-state machine (`LoggedOut`, `LoggedIn`). There is no credential store: any
//! non-empty email and password log in, and the display name is the email's local part.

use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;

use crate::app::FeedApp;
use crate::errors::{AppError, AppErrorWithRevision};
use crate::models::{LoginPrefill, SignupNotice, User};

/// Current viewer state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionGate {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl SessionGate {
    pub fn current_user(&self) -> Option<&User> {
        match self {
            SessionGate::LoggedOut => None,
            SessionGate::LoggedIn(user) => Some(user),
        }
    }

    /// Log in with any non-empty email and password.
    ///
    /// On failure the gate keeps its previous state.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Please enter email and password.".to_string(),
            ));
        }

        let user = User {
            name: display_name(email).to_string(),
            email: email.to_string(),
        };
        tracing::info!("User {} logged in", user.name);

        *self = SessionGate::LoggedIn(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let SessionGate::LoggedIn(user) = self {
            tracing::info!("User {} logged out", user.name);
        }
        *self = SessionGate::LoggedOut;
    }

    /// Cosmetic signup. Nothing is stored; the caller is sent back to the login form
    /// with its fields pre-filled.
    pub fn signup(&self, name: &str, email: &str, password: &str) -> SignupNotice {
        tracing::info!("User {} signed up (UI only)", name);
        SignupNotice {
            message: format!("Account for {} created (UI only). Please log in.", name),
            login_prefill: LoginPrefill {
                email: email.to_string(),
                password: password.to_string(),
            },
        }
    }
}

/// Everything before the first `@`.
pub fn display_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Middleware that rejects requests while nobody is logged in.
pub async fn session_layer(feed: Arc<Mutex<FeedApp>>, request: Request, next: Next) -> Response {
    let rejection = {
        let app = feed.lock().await;
        if app.current_user().is_some() {
            None
        } else {
            Some(AppErrorWithRevision {
                error: AppError::Unauthorized("Please log in first.".to_string()),
                revision_id: app.revision_id(),
            })
        }
    };

    match rejection {
        None => next.run(request).await,
        Some(rejection) => {
            tracing::debug!("Rejected {} without a session", request.uri().path());
            rejection.into_response()
        }
    }
}
