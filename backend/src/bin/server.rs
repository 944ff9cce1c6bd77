//! Draft Review HTTP Server Binary
//!
//! Serves the review dashboard. Runs one reload cycle at startup, then on
//! every press of the Reload button (or `POST /v1/reload`).
//!
//! # Usage
//!
//! ```bash
//! # Serve ./data and ./out from the current directory
//! cargo run --bin draft-review-server
//!
//! # Read the documents from another machine serving the same layout
//! REVIEW_SOURCE_URL=http://pipeline-host:5000 cargo run --bin draft-review-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REVIEW_ROOT`: Directory holding `data/` and `out/` (default: .)
//! - `REVIEW_DELTA_PATH`, `REVIEW_DRAFTS_PATH`: document locations
//! - `REVIEW_SOURCE_URL`: fetch documents over HTTP from this base URL
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use draft_review::config::ServerConfig;
use draft_review::http::{create_router, AppState};
use draft_review::io::{DocumentLoader, FsLoader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Draft Review server");

    let config = ServerConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let loader = build_loader(&config)?;

    let state = AppState::new(loader, config.paths.clone(), config.root.clone());

    let paths = state.reloader.paths();
    info!("Delta document: {}, drafts document: {}", paths.delta, paths.drafts);

    // Initial load; a failure is shown on the page and the server still starts
    match state.reloader.reload().await {
        Ok(outcome) => info!("Initial reload: {:?}", outcome),
        Err(e) => warn!("Initial reload failed: {}", e),
    }

    let app = create_router(state);

    let addr = config.bind_addr().map_err(|e| anyhow::anyhow!(e))?;
    info!("Server listening on http://{}", addr);
    info!("Dashboard: http://{}/frontend/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_loader(config: &ServerConfig) -> anyhow::Result<Arc<dyn DocumentLoader>> {
    match &config.source_url {
        #[cfg(feature = "remote-source")]
        Some(url) => {
            info!("Loading documents from {}", url);
            Ok(Arc::new(draft_review::io::HttpLoader::new(url.clone())?))
        }
        #[cfg(not(feature = "remote-source"))]
        Some(_) => anyhow::bail!("REVIEW_SOURCE_URL requires the `remote-source` feature"),
        None => {
            let loader = FsLoader::new(config.root.clone());
            info!("Loading documents from {}", loader.root().display());
            Ok(Arc::new(loader))
        }
    }
}
