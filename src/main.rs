//! Mini Social feed service
//!
//! A single-user social feed held in memory. Every action returns a freshly rendered,
//! declarative view of the feed for the client to display.

mod api;
mod app;
mod auth;
mod config;
mod errors;
mod models;
mod render;
mod search;
mod share;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::FeedApp;
use config::Config;

/// Application state shared across all handlers.
///
/// The feed sits behind a single lock so each action is handled to completion before the
/// next one starts.
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<Mutex<FeedApp>>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let posts = if config.seed_posts {
            store::seed_posts()
        } else {
            Vec::new()
        };
        let feed = FeedApp::new(posts, config.page_url.clone());

        Self {
            feed: Arc::new(Mutex::new(feed)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mini Social feed service");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Share page URL: {}", config.page_url);

    let state = AppState::new(&config);
    tracing::info!(
        "Feed ready with {} posts",
        state.feed.lock().await.store().len()
    );

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Session routes (no session required)
    let session_routes = Router::new()
        .route("/session", get(api::get_session))
        .route("/session/login", post(api::login))
        .route("/session/logout", post(api::logout))
        .route("/session/signup", post(api::signup));

    // Feed routes, reachable only while logged in
    let feed = state.feed.clone();
    let feed_routes = Router::new()
        .route("/feed", get(api::get_feed))
        .route("/feed/revision", get(api::get_revision))
        .route("/search", get(api::search_posts))
        .route("/posts", post(api::publish_post))
        .route("/posts/{id}", delete(api::delete_post))
        .route("/posts/{id}/like", post(api::toggle_like))
        .route("/posts/{id}/comments", post(api::add_comment))
        .route("/posts/{id}/share", post(api::share_post))
        .route_layer(middleware::from_fn(move |req, next| {
            auth::session_layer(feed.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", session_routes.merge(feed_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
