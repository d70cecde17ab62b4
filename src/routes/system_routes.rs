use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::services::news_service;
use crate::state::news::NewsStore;

#[derive(Clone)]
struct SystemState {
    version: String,
    store: NewsStore,
}

pub fn routes(store: NewsStore, config: &AppConfig) -> Router {
    Router::new()
        .route("/alive", get(is_alive))
        .route("/version", get(version))
        .route("/count", get(count))
        .with_state(SystemState {
            version: config.server_version.clone(),
            store,
        })
}

/// GET /system/alive
async fn is_alive() -> &'static str {
    "OK"
}

/// GET /system/version
async fn version(State(state): State<SystemState>) -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": state.version,
    }))
}

/// GET /system/count
async fn count(State(state): State<SystemState>) -> Json<Value> {
    Json(json!({ "news": news_service::count(&state.store) }))
}
