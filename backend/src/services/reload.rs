//! Reload cycle orchestration.
//!
//! A cycle fetches both documents concurrently, builds the page and commits
//! it to the view. Cycles are numbered; a cycle only commits if no newer
//! cycle was started meanwhile, so an overtaken cycle can never overwrite
//! fresher output.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{ReviewError, ReviewResult};
use crate::io::DocumentLoader;
use crate::models::{DeltaDocument, DraftsDocument};
use crate::services::dashboard::DashboardPage;
use crate::services::view::{DashboardView, ReloadState};

pub const DEFAULT_DELTA_PATH: &str = "data/events_delta.json";
pub const DEFAULT_DRAFTS_PATH: &str = "out/drafts.json";

/// Where the two documents live, relative to the loader's root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPaths {
    pub delta: String,
    pub drafts: String,
}

impl Default for DocumentPaths {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA_PATH.to_string(),
            drafts: DEFAULT_DRAFTS_PATH.to_string(),
        }
    }
}

/// What a finished cycle did to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReloadOutcome {
    /// Cards were rendered
    Rendered { cards: usize },
    /// No drafted items; the empty-state indicator is shown
    Empty,
    /// A newer cycle started before this one finished; nothing was committed
    Discarded,
}

/// Runs reload cycles against an injected loader and view.
#[derive(Clone)]
pub struct Reloader {
    loader: Arc<dyn DocumentLoader>,
    view: Arc<dyn DashboardView>,
    paths: DocumentPaths,
    generation: Arc<AtomicU64>,
    commit: Arc<Mutex<()>>,
}

impl Reloader {
    pub fn new(
        loader: Arc<dyn DocumentLoader>,
        view: Arc<dyn DashboardView>,
        paths: DocumentPaths,
    ) -> Self {
        Self {
            loader,
            view,
            paths,
            generation: Arc::new(AtomicU64::new(0)),
            commit: Arc::new(Mutex::new(())),
        }
    }

    pub fn paths(&self) -> &DocumentPaths {
        &self.paths
    }

    /// Number of the most recently started cycle.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Run one complete cycle.
    ///
    /// Failures are shown on the view and returned. A stale cycle returns
    /// [`ReloadOutcome::Discarded`] whether it succeeded or not.
    pub async fn reload(&self) -> ReviewResult<ReloadOutcome> {
        let generation = {
            let _guard = self.commit.lock();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            self.view.set_state(ReloadState::Loading);
            generation
        };
        log::debug!("Reload cycle {} started", generation);

        let result = self.build_page().await;

        let _guard = self.commit.lock();
        if self.generation() != generation {
            log::debug!("Reload cycle {} overtaken; discarding result", generation);
            return Ok(ReloadOutcome::Discarded);
        }

        match result.and_then(|page| self.commit_page(page)) {
            Ok(outcome) => {
                log::info!("Reload cycle {} committed: {:?}", generation, outcome);
                Ok(outcome)
            }
            Err(err) => {
                log::warn!("Reload cycle {} failed: {}", generation, err);
                self.view.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    async fn build_page(&self) -> ReviewResult<DashboardPage> {
        let (delta, drafts) = tokio::try_join!(
            self.loader.load(&self.paths.delta),
            self.loader.load(&self.paths.drafts)
        )?;

        catch_unwind(AssertUnwindSafe(|| {
            let delta = DeltaDocument::from_value(delta);
            let drafts = DraftsDocument::from_value(drafts);
            DashboardPage::build(&delta, &drafts)
        }))
        .map_err(|panic| ReviewError::Render(panic_message(&*panic)))
    }

    fn commit_page(&self, page: DashboardPage) -> ReviewResult<ReloadOutcome> {
        let outcome = if page.is_empty() {
            ReloadOutcome::Empty
        } else {
            ReloadOutcome::Rendered {
                cards: page.cards.len(),
            }
        };
        self.view.show_page(page)?;
        Ok(outcome)
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "page construction panicked".to_string()
    }
}
