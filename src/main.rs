//! Polls Web
//!
//! A server-rendered polling application with SQLite persistence.

mod config;
mod db;
mod errors;
mod models;
mod pages;
mod templates;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Polls Web");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState { repo };

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
    // Public pages
    let poll_routes = Router::new()
        .route("/polls/", get(pages::index))
        .route("/polls/{id}/", get(pages::detail))
        .route("/polls/{id}/results/", get(pages::results))
        .route("/polls/{id}/vote/", post(pages::vote));

    // Administrative API for seeding polls
    let api_routes = Router::new()
        .route("/questions", get(pages::list_questions))
        .route("/questions", post(pages::create_question))
        .route("/questions/{id}/choices", post(pages::create_choice));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(poll_routes)
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
