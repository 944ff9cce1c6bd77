//! Router configuration for the dashboard server.
//!
//! Sets up all routes, static directories and middleware (CORS, compression,
//! tracing).

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use super::shell::{DASHBOARD_PATH, RELOAD_PATH};
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the dashboard is a single-user review tool
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/reload", post(handlers::post_reload));

    // Previews are linked as ../out/... from the dashboard page
    let data_dir = ServeDir::new(state.static_root.join("data"));
    let out_dir = ServeDir::new(state.static_root.join("out"));

    Router::new()
        .route("/", get(handlers::to_dashboard))
        .route("/frontend", get(handlers::to_dashboard))
        .route(DASHBOARD_PATH, get(handlers::dashboard_page))
        .route(RELOAD_PATH, post(handlers::reload_form))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .nest_service("/data", data_dir)
        .nest_service("/out", out_dir)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::FsLoader;
    use crate::services::reload::DocumentPaths;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let loader = Arc::new(FsLoader::new("."));
        let state = AppState::new(loader, DocumentPaths::default(), ".");
        let _router = create_router(state);
    }
}
