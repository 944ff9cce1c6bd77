//! Service layer: card extraction and rendering, page assembly, the view
//! abstraction and the reload cycle that ties them together.
//!
//! Dependency order, leaves first: [`card`] → [`dashboard`] → [`view`] →
//! [`reload`].

pub mod card;
pub mod dashboard;
pub mod reload;
pub mod view;


pub use card::{render_card, Card};
pub use dashboard::{render_cards, status_line, DashboardPage};
pub use reload::{DocumentPaths, ReloadOutcome, Reloader};
pub use view::{DashboardView, MemoryView, ReloadState, ViewSnapshot};
