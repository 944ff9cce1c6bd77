//! Error types for a reload cycle.
//!
//! Missing fields inside the documents are never errors: they are defaulted
//! while parsing. Only whole-cycle failures end up here.

use thiserror::Error;

/// Result type for loader and reload operations
pub type ReviewResult<T> = std::result::Result<T, ReviewError>;

/// Errors that abort a reload cycle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// The document could not be retrieved (non-success status)
    #[error("Failed to load {path}: {status}")]
    Fetch { path: String, status: u16 },

    /// The document body is not valid JSON
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// Building or committing the rendered page failed
    #[error("Render fault: {0}")]
    Render(String),
}

impl ReviewError {
    pub fn fetch(path: impl Into<String>, status: u16) -> Self {
        ReviewError::Fetch {
            path: path.into(),
            status,
        }
    }

    pub fn parse(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ReviewError::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Stable code used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            ReviewError::Fetch { .. } => "FETCH_ERROR",
            ReviewError::Parse { .. } => "PARSE_ERROR",
            ReviewError::Render(_) => "RENDER_FAULT",
        }
    }
}
