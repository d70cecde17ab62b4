use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::AppConfig;
use crate::routes::{news_routes, system_routes};
use crate::state::news::NewsStore;

/// Build the complete Axum application:
/// - /newsReport   (list, lookup, append)
/// - /system       (alive, version, count)
///
/// Every route shares the same `store`.
pub fn build_app(store: NewsStore, cfg: &AppConfig) -> Router {
    Router::new()
        .merge(news_routes::routes(store.clone(), cfg))
        .nest("/system", system_routes::routes(store, cfg))
        // Logging middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
