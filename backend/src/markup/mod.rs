//! HTML construction primitives: escaping, URL checks, and an element builder.

pub mod element;
pub mod escape;
pub mod url;

pub use element::{Element, Markup};
pub use escape::{encode_component, escape, escape_attr, escape_text};
pub use url::SafeUrl;
