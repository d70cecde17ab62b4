/*****************************************************************************************
 *
 *  newsreport – In-memory news feed over HTTP
 *  ------------------------------------------
 *
 *  GET  /newsReport        list every entry
 *  GET  /newsReport/{id}   first entry with that id
 *  POST /newsReport        append an entry
 *
 *****************************************************************************************/

use tokio::net::TcpListener;
use axum::serve;

use tracing_subscriber::FmtSubscriber;

use newsreport::app;
use newsreport::config::{self, AppConfig};
use newsreport::errors::StartupError;
use newsreport::services::news_service;
use newsreport::state::news::new_store;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    //
    // ────────────────────────────────────────────────────────
    //  Locate and load config.json (EXE folder or its parent)
    // ────────────────────────────────────────────────────────
    //
    let config_path = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(config::locate));

    let cfg = match &config_path {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };

    //
    // ────────────────────────────────────────────────────────
    //  Configure logging
    // ────────────────────────────────────────────────────────
    //
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cfg.level_filter())
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match &config_path {
        Some(path) => tracing::info!("Loaded config.json from {}", path.display()),
        None => tracing::warn!("config.json not found next to the executable, using defaults"),
    }

    tracing::info!("Starting newsreport…");
    tracing::info!("Loaded configuration: {:?}", cfg);

    //
    // ────────────────────────────────────────────────────────
    //  Create the seeded news store
    // ────────────────────────────────────────────────────────
    //
    let store = new_store();
    tracing::info!("News store ready: {} entries", news_service::count(&store));

    //
    // ────────────────────────────────────────────────────────
    //  Build Axum app and start listening
    // ────────────────────────────────────────────────────────
    //
    let app = app::build_app(store, &cfg);

    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("Listening on http://{}", addr);

    serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await
        .map_err(StartupError::Serve)
}

//
// ─────────────────────────────────────────────────────────────
//  Graceful shutdown handler
// ─────────────────────────────────────────────────────────────
//
async fn shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        // never resolves: without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }

    tracing::warn!("CTRL+C received, shutting down. In-memory news is discarded.");
}
