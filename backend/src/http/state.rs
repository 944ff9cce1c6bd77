//! Application state for the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use crate::io::DocumentLoader;
use crate::services::reload::{DocumentPaths, Reloader};
use crate::services::view::MemoryView;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Runs reload cycles into `view`
    pub reloader: Reloader,
    /// What the dashboard currently shows
    pub view: Arc<MemoryView>,
    /// Directory whose `data/` and `out/` subdirectories are served
    pub static_root: PathBuf,
}

impl AppState {
    /// Wire a fresh view to `loader`.
    pub fn new(
        loader: Arc<dyn DocumentLoader>,
        paths: DocumentPaths,
        static_root: impl Into<PathBuf>,
    ) -> Self {
        let view = Arc::new(MemoryView::new());
        let reloader = Reloader::new(loader, view.clone(), paths);
        Self {
            reloader,
            view,
            static_root: static_root.into(),
        }
    }
}
