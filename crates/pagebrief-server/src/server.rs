//! HTTP server
//!
//! Two read-only routes, `/summarize` and `/key-topics`, each taking a
//! `url` query parameter and answering with an HTML page.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use pagebrief::{BriefError, BriefTask, Briefer};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::render::render_brief;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured.
    pub briefer: Option<Arc<Briefer>>,
}

impl AppState {
    pub fn new(briefer: Option<Briefer>) -> Self {
        Self {
            briefer: briefer.map(Arc::new),
        }
    }
}

/// Query params for brief routes.
#[derive(Debug, Deserialize)]
pub struct BriefParams {
    pub url: Option<String>,
}

/// Errors returned by handlers.
#[derive(Debug)]
pub enum AppError {
    Brief(BriefError),
    Render(askama::Error),
}

impl From<BriefError> for AppError {
    fn from(err: BriefError) -> Self {
        AppError::Brief(err)
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Render(err)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Brief(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Brief(BriefError::Api { .. }) => StatusCode::BAD_GATEWAY,
            AppError::Brief(BriefError::FirstByteTimeout) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Brief(err) => err.to_string(),
            AppError::Render(err) => format!("Failed to render page: {}", err),
        };
        if status.is_server_error() {
            tracing::error!(%status, "{}", message);
        }
        (status, message).into_response()
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", get(summarize))
        .route("/key-topics", get(key_topics))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Reject every request while no API key is configured.
async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.briefer.is_none() {
        return AppError::Brief(BriefError::MissingApiKey).into_response();
    }
    next.run(request).await
}

async fn summarize(
    State(state): State<AppState>,
    Query(params): Query<BriefParams>,
) -> Result<Html<String>, AppError> {
    brief_page(&state, BriefTask::Summarize, params).await
}

async fn key_topics(
    State(state): State<AppState>,
    Query(params): Query<BriefParams>,
) -> Result<Html<String>, AppError> {
    brief_page(&state, BriefTask::KeyTopics, params).await
}

async fn brief_page(
    state: &AppState,
    task: BriefTask,
    params: BriefParams,
) -> Result<Html<String>, AppError> {
    let url = params
        .url
        .filter(|u| !u.is_empty())
        .ok_or(BriefError::MissingUrl)?;
    let briefer = state.briefer.as_ref().ok_or(BriefError::MissingApiKey)?;

    let brief = briefer.run(task, &url).await?;
    Ok(Html(render_brief(&brief)?))
}

/// Start the web server.
pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
