// ============================================================================
// LEGEND BOARD - A SINGLE-USER DISCUSSION BOARD
// ============================================================================

// - Posts and comments kept newest-first / oldest-first
// - Whole collection persisted to one local slot after every change
// - Server-rendered HTML with escaping on by default
// - Structured logging

mod board;
mod config;
mod dto;
mod errors;
mod models;
mod routes;
mod states;
mod storage;
mod view;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    board::{Board, SLOT_KEY},
    config::Config,
    storage::FileStore,
};
use states::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env();

    let store = FileStore::open(&config.data_dir)
        .with_context(|| format!("cannot open data directory {}", config.data_dir.display()))?;
    info!("Data directory: {}", store.dir().display());

    // A slot that does not parse stops startup; nothing is overwritten.
    let board = Board::load_or_initialize(Box::new(store), SLOT_KEY)
        .context("failed to load the board")?;

    let app = routes::router(AppState::new(board));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;

    info!("Board running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /                      - Board page");
    info!("  GET    /health                - Health check");
    info!("  POST   /posts                 - New post");
    info!("  POST   /posts/:id/comments    - New comment");
    info!("  POST   /posts/:id/toggle      - Show/hide comments");

    axum::serve(listener, app).await?;
    Ok(())
}
