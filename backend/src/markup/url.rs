//! URL values that are allowed into `href`/`src` attributes.

use std::fmt;

use serde::Serialize;

/// Schemes accepted for links and images coming from upstream data.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// A URL that passed the scheme allow-list.
///
/// Scheme-less references (`../out/x.html`, `#`, `/path`) are relative and
/// always accepted. Escaping still happens when the value is written into
/// an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeUrl(String);

impl SafeUrl {
    /// Validate `raw`, returning `None` for disallowed schemes such as
    /// `javascript:` or `data:`.
    pub fn parse(raw: &str) -> Option<SafeUrl> {
        let trimmed = raw.trim();
        match scheme_of(trimmed) {
            Some(scheme) if !ALLOWED_SCHEMES.contains(&scheme.as_str()) => None,
            _ => Some(SafeUrl(trimmed.to_string())),
        }
    }

    /// The `#` placeholder link.
    pub fn placeholder() -> SafeUrl {
        SafeUrl("#".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lower-cased scheme of `url`, if it has one.
///
/// Browsers drop ASCII whitespace and control characters while parsing a
/// scheme (`java\tscript:` is `javascript:`), so those are ignored here too.
fn scheme_of(url: &str) -> Option<String> {
    let mut scheme = String::new();
    for c in url.chars() {
        match c {
            ':' => return if scheme.is_empty() { None } else { Some(scheme) },
            '/' | '?' | '#' => return None,
            c if c.is_ascii_whitespace() || c.is_ascii_control() => continue,
            c => scheme.push(c.to_ascii_lowercase()),
        }
    }
    None
}
