//! HTTP backend for the story picker.
//!
//! ## Routes
//!
//! - `POST /api/jira/connect`: store credentials and verify them
//! - `GET /api/jira/stories`: list stories of the `GENAI` project
//! - `GET /api/jira/stories/{key}`: one story with derived description and criteria

mod error;
mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;
use crate::jira::JiraClient;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub jira: Arc<JiraClient>,
}

impl AppState {
    pub fn new(jira: JiraClient) -> Self {
        Self {
            jira: Arc::new(jira),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/jira/connect", post(handlers::connect))
        .route("/api/jira/stories", get(handlers::list_stories))
        .route("/api/jira/stories/{key}", get(handlers::story_details))
        .with_state(state)
}

/// Serve the API on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "storylink API listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

pub async fn run_server(addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, AppState::new(JiraClient::new()?)).await
}
