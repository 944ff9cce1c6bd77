//! A small HTML builder that escapes at every interpolation point.
//!
//! [`Markup`] can only be produced by escaping text or by rendering an
//! [`Element`], so untrusted strings cannot reach the output unescaped.
//! Tag and attribute names are `&'static str` and therefore authored in code.

use std::fmt;

use super::escape::{escape_attr, escape_text};
use super::url::SafeUrl;

/// Rendered HTML that is safe to concatenate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Escaped text node.
    pub fn text(text: &str) -> Self {
        Markup(escape_text(text))
    }

    /// Markup authored as a literal in this crate (doctype, stylesheet).
    pub fn from_static(html: &'static str) -> Self {
        Markup(html.to_string())
    }

    /// Concatenate fragments with `separator` in between.
    pub fn join<I>(fragments: I, separator: &'static str) -> Self
    where
        I: IntoIterator<Item = Markup>,
    {
        let parts: Vec<String> = fragments.into_iter().map(|m| m.0).collect();
        Markup(parts.join(separator))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
enum Node {
    Text(String),
    Markup(Markup),
}

/// An HTML element under construction.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
    void: bool,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            void: false,
        }
    }

    /// Element without content or closing tag (`img`, `br`, `input`).
    pub fn void(tag: &'static str) -> Self {
        Self {
            void: true,
            ..Self::new(tag)
        }
    }

    /// Plain attribute. URL-bearing attributes go through [`Element::href`]
    /// and [`Element::src`] instead.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        debug_assert!(
            !matches!(name, "href" | "src" | "action"),
            "url attribute `{name}` must use a SafeUrl"
        );
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    pub fn href(mut self, url: &SafeUrl) -> Self {
        self.attrs.push(("href", url.as_str().to_string()));
        self
    }

    pub fn src(mut self, url: &SafeUrl) -> Self {
        self.attrs.push(("src", url.as_str().to_string()));
        self
    }

    pub fn action(mut self, url: &SafeUrl) -> Self {
        self.attrs.push(("action", url.as_str().to_string()));
        self
    }

    /// Text child, escaped on render.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(Node::Markup(child.into()));
        self
    }

    pub fn child_opt(self, child: Option<impl Into<Markup>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn render(&self) -> Markup {
        let mut out = String::new();
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if self.void {
            out.push_str(" />");
            return Markup(out);
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape_text(text)),
                Node::Markup(markup) => out.push_str(markup.as_str()),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        Markup(out)
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        element.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_children_are_escaped() {
        let html = Element::new("h3").text("<script>alert(1)</script>").render();
        assert_eq!(html.as_str(), "<h3>&lt;script&gt;alert(1)&lt;/script&gt;</h3>");
    }

    #[test]
    fn test_attributes_are_escaped() {
        let url = SafeUrl::parse("https://x.org/?a=1&b=\"2\"").unwrap();
        let html = Element::new("a").href(&url).attr("target", "_blank").text("go").render();
        assert_eq!(
            html.as_str(),
            "<a href=\"https://x.org/?a=1&amp;b=&quot;2&quot;\" target=\"_blank\">go</a>"
        );
    }

    #[test]
    fn test_nested_and_void() {
        let img = SafeUrl::parse("a.png").unwrap();
        let html = Element::new("div")
            .class("card")
            .child(Element::void("img").src(&img).attr("alt", ""))
            .child_opt(None::<Element>)
            .child(Element::new("b").text("Date:"))
            .text(" 1 & 2")
            .render();
        assert_eq!(
            html.as_str(),
            "<div class=\"card\"><img src=\"a.png\" alt=\"\" /><b>Date:</b> 1 &amp; 2</div>"
        );
    }

    #[test]
    fn test_join() {
        let joined = Markup::join(vec![Markup::text("a<"), Markup::text("b")], "\n");
        assert_eq!(joined.as_str(), "a&lt;\nb");
        assert!(Markup::join(Vec::new(), "\n").is_empty());
    }
}
