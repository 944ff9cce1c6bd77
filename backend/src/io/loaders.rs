use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ReviewError, ReviewResult};

/// Source of the raw delta/drafts documents.
///
/// Every call goes back to the source; implementations never cache.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, path: &str) -> ReviewResult<Value>;
}

fn parse_body(path: &str, body: &[u8]) -> ReviewResult<Value> {
    serde_json::from_slice(body).map_err(|e| ReviewError::parse(path, e))
}

/// Reads documents from a root directory holding `data/` and `out/`.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `path` under the root. Absolute paths and `..` segments are
    /// refused so the loader cannot read outside its directory.
    fn resolve(&self, path: &str) -> ReviewResult<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(ReviewError::fetch(path, 403));
        }
        Ok(self.root.join(relative))
    }
}

fn io_status(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::NotFound => 404,
        ErrorKind::PermissionDenied => 403,
        _ => 500,
    }
}

#[async_trait]
impl DocumentLoader for FsLoader {
    async fn load(&self, path: &str) -> ReviewResult<Value> {
        let full = self.resolve(path)?;
        let body = tokio::fs::read(&full).await.map_err(|e| {
            log::warn!("Reading {} failed: {}", full.display(), e);
            ReviewError::fetch(path, io_status(e.kind()))
        })?;
        parse_body(path, &body)
    }
}

/// Fetches documents over HTTP relative to a base URL.
#[cfg(feature = "remote-source")]
#[derive(Debug, Clone)]
pub struct HttpLoader {
    client: reqwest::Client,
    base_url: String,
}

/// Status reported when no HTTP response was received at all.
#[cfg(feature = "remote-source")]
pub const NO_RESPONSE: u16 = 0;

#[cfg(feature = "remote-source")]
impl HttpLoader {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(feature = "remote-source")]
#[async_trait]
impl DocumentLoader for HttpLoader {
    async fn load(&self, path: &str) -> ReviewResult<Value> {
        use reqwest::header::{CACHE_CONTROL, PRAGMA};

        let url = self.url_for(path);
        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| {
                log::warn!("Request to {} failed: {}", url, e);
                ReviewError::fetch(path, e.status().map_or(NO_RESPONSE, |s| s.as_u16()))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::fetch(path, status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            log::warn!("Reading body of {} failed: {}", url, e);
            ReviewError::parse(path, e)
        })?;
        parse_body(path, &body)
    }
}
