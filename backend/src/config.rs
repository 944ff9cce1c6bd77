//! Server configuration and environment variable handling.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::services::reload::{DocumentPaths, DEFAULT_DELTA_PATH, DEFAULT_DRAFTS_PATH};

/// Dashboard server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Directory holding `data/` and `out/`
    pub root: PathBuf,
    /// Document locations relative to `root` (or to `source_url`)
    pub paths: DocumentPaths,
    /// Remote host serving the documents; local files are used when unset
    pub source_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            root: PathBuf::from("."),
            paths: DocumentPaths::default(),
            source_url: None,
        }
    }
}

impl ServerConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 8080)
    /// - `REVIEW_ROOT` (optional, default: `.`): directory holding `data/` and `out/`
    /// - `REVIEW_DELTA_PATH` (optional, default: `data/events_delta.json`)
    /// - `REVIEW_DRAFTS_PATH` (optional, default: `out/drafts.json`)
    /// - `REVIEW_SOURCE_URL` (optional): fetch documents from this base URL
    ///
    /// # Errors
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT must be a port number, got {:?}", raw))?,
            Err(_) => 8080,
        };
        let root = env::var("REVIEW_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let paths = DocumentPaths {
            delta: non_empty_var("REVIEW_DELTA_PATH")
                .unwrap_or_else(|| DEFAULT_DELTA_PATH.to_string()),
            drafts: non_empty_var("REVIEW_DRAFTS_PATH")
                .unwrap_or_else(|| DEFAULT_DRAFTS_PATH.to_string()),
        };
        let source_url = non_empty_var("REVIEW_SOURCE_URL");

        Ok(Self {
            host,
            port,
            root,
            paths,
            source_url,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
