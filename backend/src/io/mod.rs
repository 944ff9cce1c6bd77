//! Document loading.
//!
//! A reload cycle reads two JSON documents through a [`DocumentLoader`]:
//! either from the local data root ([`FsLoader`]) or from a remote host
//! serving the same layout ([`HttpLoader`], `remote-source` feature).
//!
//! # Example
//!
//! ```no_run
//! use draft_review::io::{DocumentLoader, FsLoader};
//!
//! # async fn run() -> draft_review::error::ReviewResult<()> {
//! let loader = FsLoader::new(".");
//! let delta = loader.load("data/events_delta.json").await?;
//! println!("{}", delta["summary"]);
//! # Ok(())
//! # }
//! ```

pub mod loaders;

pub use loaders::{DocumentLoader, FsLoader};

#[cfg(feature = "remote-source")]
pub use loaders::HttpLoader;
