//! Data Transfer Objects for the JSON API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::card::Card;
use crate::services::reload::ReloadOutcome;
use crate::services::view::{ReloadState, ViewSnapshot};

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// The dashboard as currently displayed.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    /// Status line (`run_at: ... | items: ...`)
    pub meta: String,
    /// Summary text, or the error text after a failed cycle
    pub summary: String,
    /// Whether the empty-state indicator is visible
    pub empty: bool,
    pub cards: Vec<Card>,
    pub state: ReloadState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<ViewSnapshot> for DashboardResponse {
    fn from(view: ViewSnapshot) -> Self {
        Self {
            meta: view.meta,
            summary: view.summary,
            empty: view.empty_visible,
            cards: view.cards,
            state: view.state,
            error: view.error,
            updated_at: view.updated_at,
        }
    }
}

/// Result of a reload triggered through the API.
#[derive(Debug, Clone, Serialize)]
pub struct ReloadResponse {
    #[serde(flatten)]
    pub outcome: ReloadOutcome,
    /// Most recently started cycle when the response was built
    pub generation: u64,
}
