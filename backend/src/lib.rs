//! # Draft Review
//!
//! Review dashboard for machine-drafted event announcements.
//!
//! The crate reconciles two documents produced by upstream tools, a delta of
//! the monitored event feed and the drafting engine's output, into one card
//! per successfully drafted event, so a person can audit the email and
//! WhatsApp copy next to the event data it was generated from.
//!
//! ## Architecture
//!
//! - [`models`]: typed, defaulting parse of the delta and drafts documents
//! - [`markup`]: escaping, URL checks and an auto-escaping HTML builder
//! - [`services`]: card model, page assembly, view abstraction, reload cycle
//! - [`io`]: document loaders (filesystem, HTTP)
//! - [`http`]: Axum-based dashboard server and JSON API
//!
//! Every reload recomputes the whole view from the two documents; nothing is
//! carried over between cycles except what the view currently shows.

pub mod config;
pub mod error;
pub mod io;
pub mod markup;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{ReviewError, ReviewResult};
