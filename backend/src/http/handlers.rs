//! HTTP handlers for the dashboard and the JSON API.

use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};

use super::dto::{DashboardResponse, HealthResponse, ReloadResponse};
use super::error::AppError;
use super::shell::{render_shell, DASHBOARD_PATH};
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

// =============================================================================
// Dashboard page
// =============================================================================

/// GET / and GET /frontend
pub async fn to_dashboard() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}

/// GET /frontend/
///
/// Render the current view. Does not trigger a reload.
pub async fn dashboard_page(State(state): State<AppState>) -> Html<String> {
    Html(render_shell(&state.view.snapshot()).into_string())
}

/// POST /frontend/reload
///
/// Reload button target: run a cycle, then show the page again. A failed
/// cycle is already visible in the summary area.
pub async fn reload_form(State(state): State<AppState>) -> Redirect {
    if state.reloader.reload().await.is_err() {
        tracing::debug!("Reload from dashboard failed; error shown in summary");
    }
    Redirect::to(DASHBOARD_PATH)
}

// =============================================================================
// JSON API
// =============================================================================

/// GET /v1/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> HandlerResult<DashboardResponse> {
    Ok(Json(state.view.snapshot().into()))
}

/// POST /v1/reload
pub async fn post_reload(State(state): State<AppState>) -> HandlerResult<ReloadResponse> {
    let outcome = state.reloader.reload().await?;
    Ok(Json(ReloadResponse {
        outcome,
        generation: state.reloader.generation(),
    }))
}
