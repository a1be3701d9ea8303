//! Web router using Axum

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use newsfeed_core::views::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use newsfeed_core::{NewsStore, PageRequest, Story, StorySource};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;

/// Query string for `latestnews`
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Query string for `search`; a missing query matches every story
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// Create the web router
pub fn create_router<S: StorySource>(store: Arc<NewsStore<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/newsfeed/latestnews", get(latest_handler::<S>))
        .route("/api/newsfeed/search", get(search_handler::<S>))
        .route("/api/newsfeed/refresh", post(refresh_handler::<S>))
        .route("/api/health", get(health_handler::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(store)
}

async fn latest_handler<S: StorySource>(
    State(store): State<Arc<NewsStore<S>>>,
    Query(params): Query<LatestParams>,
) -> Result<Json<Vec<Story>>, AppError> {
    let request = PageRequest::new(params.page, params.page_size)?;
    let stories = store.latest(request).await?;
    Ok(Json(stories))
}

async fn search_handler<S: StorySource>(
    State(store): State<Arc<NewsStore<S>>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Story>>, AppError> {
    let stories = store.search(&params.query).await?;
    Ok(Json(stories))
}

async fn refresh_handler<S: StorySource>(State(store): State<Arc<NewsStore<S>>>) -> StatusCode {
    store.refresh().await;
    tracing::info!("Story cache invalidated on request");
    StatusCode::NO_CONTENT
}

async fn health_handler<S: StorySource>(
    State(store): State<Arc<NewsStore<S>>>,
) -> Json<serde_json::Value> {
    let health = store.health().await;
    Json(serde_json::json!({
        "status": "ok",
        "cached": health.cached,
        "ttlSecs": health.ttl_secs,
        "storyLimit": health.story_limit,
    }))
}
