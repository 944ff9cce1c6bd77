//! The surface a reload cycle renders into.
//!
//! The orchestrator never touches global state: it is handed a
//! [`DashboardView`] and writes the page, errors and lifecycle state there.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::ReviewResult;
use crate::markup::Markup;
use crate::services::card::Card;
use crate::services::dashboard::DashboardPage;

/// Prefix of the summary text when a cycle fails.
pub const ERROR_PREFIX: &str = "Frontend error:\n";

/// Lifecycle of the most recent reload cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReloadState {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Output side of a reload cycle.
pub trait DashboardView: Send + Sync {
    /// Record a lifecycle transition.
    fn set_state(&self, state: ReloadState);

    /// Replace the whole page in one step.
    fn show_page(&self, page: DashboardPage) -> ReviewResult<()>;

    /// Show `message` in place of the summary. Cards stay as they are.
    fn show_error(&self, message: &str);
}

/// Everything currently displayed.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub meta: String,
    pub summary: String,
    pub empty_visible: bool,
    pub cards: Vec<Card>,
    pub cards_markup: Markup,
    pub error: Option<String>,
    pub state: ReloadState,
    pub updated_at: DateTime<Utc>,
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        Self {
            meta: String::new(),
            summary: "Loading...".to_string(),
            empty_visible: false,
            cards: Vec::new(),
            cards_markup: Markup::default(),
            error: None,
            state: ReloadState::Idle,
            updated_at: Utc::now(),
        }
    }
}

/// In-memory view served by the HTTP layer.
#[derive(Debug, Default)]
pub struct MemoryView {
    inner: RwLock<ViewSnapshot>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current view.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.inner.read().clone()
    }
}

impl DashboardView for MemoryView {
    fn set_state(&self, state: ReloadState) {
        let mut view = self.inner.write();
        view.state = state;
        view.updated_at = Utc::now();
    }

    fn show_page(&self, page: DashboardPage) -> ReviewResult<()> {
        let empty_visible = page.is_empty();
        let next = ViewSnapshot {
            meta: page.meta,
            summary: page.summary,
            empty_visible,
            cards: page.cards,
            cards_markup: page.markup,
            error: None,
            state: ReloadState::Succeeded,
            updated_at: Utc::now(),
        };
        *self.inner.write() = next;
        Ok(())
    }

    fn show_error(&self, message: &str) {
        let mut view = self.inner.write();
        view.summary = format!("{}{}", ERROR_PREFIX, message);
        view.error = Some(message.to_string());
        view.state = ReloadState::Failed;
        view.updated_at = Utc::now();
    }
}
