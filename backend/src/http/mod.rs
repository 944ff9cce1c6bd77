//! HTTP server module for the review dashboard.
//!
//! Serves the rendered dashboard page, a JSON view of the same data, the
//! reload action, and the `data/` and `out/` directories so email previews
//! linked from cards resolve.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - HTML shell and JSON DTOs                               │
//! │  - Reload trigger                                         │
//! │  - Static data/out directories                            │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Reloader, DashboardPage, cards                         │
//! │  - MemoryView holding the current page                    │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Loaders (io/)                                            │
//! │  - FsLoader / HttpLoader                                  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod shell;
pub mod state;

pub use router::create_router;
pub use state::AppState;
