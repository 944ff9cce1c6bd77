//! Typed views of the two input documents.
//!
//! Parsing is the one place where loosely shaped JSON becomes strongly typed
//! data. Absent or wrong-typed values become `None`/defaults here so nothing
//! downstream has to probe optional paths.

pub mod delta;
pub mod draft;
pub mod event;
pub mod lenient;

pub use delta::{DeltaDocument, DeltaSummary};
pub use draft::{Draft, DraftItem, DraftsDocument};
pub use event::{EventDateTime, EventRecord, EventSnapshot, Image, Media, Registration};
