use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};

use crate::config::AppConfig;
use crate::errors::NewsError;
use crate::routes::render;
use crate::services::news_service;
use crate::state::news::{NewNews, NewsStore};

#[derive(Clone)]
pub struct NewsState {
    pub store: NewsStore,
    pub pretty_json: bool,
}

/// Build the /newsReport routes.
pub fn routes(store: NewsStore, cfg: &AppConfig) -> Router {
    Router::new()
        .route("/newsReport", get(list_news).post(post_news))
        .route("/newsReport/:id", get(get_news))
        .with_state(NewsState {
            store,
            pretty_json: cfg.pretty_json,
        })
}

//
// ─────────────────────────────────────────────────────────────
// GET /newsReport
// Every entry, in insertion order
// ─────────────────────────────────────────────────────────────
//
async fn list_news(State(state): State<NewsState>) -> Response {
    let views = news_service::list(&state.store);
    render::json(StatusCode::OK, &views, state.pretty_json)
}

//
// ─────────────────────────────────────────────────────────────
// GET /newsReport/{id}
// First entry with that id, or 404
// ─────────────────────────────────────────────────────────────
//
async fn get_news(
    Path(id): Path<String>,
    State(state): State<NewsState>,
) -> Response {
    match news_service::get(&state.store, &id) {
        Ok(view) => render::json(StatusCode::OK, &view, state.pretty_json),
        Err(e) => e.render(state.pretty_json),
    }
}

//
// ─────────────────────────────────────────────────────────────
// POST /newsReport
// Append an entry; the server assigns its time.
// The body is decoded as JSON whatever its Content-Type.
// ─────────────────────────────────────────────────────────────
//
async fn post_news(State(state): State<NewsState>, body: Bytes) -> Response {
    let candidate = match serde_json::from_slice::<NewNews>(&body) {
        Ok(candidate) => candidate,
        Err(e) => {
            tracing::warn!("Rejected news payload: {e}");
            return NewsError::MalformedPayload(e.to_string()).render(state.pretty_json);
        }
    };

    let view = news_service::append(&state.store, candidate);
    render::json(StatusCode::CREATED, &view, state.pretty_json)
}
