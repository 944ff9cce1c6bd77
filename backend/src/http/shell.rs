//! The HTML page around the rendered cards.

use crate::markup::{Element, Markup, SafeUrl};
use crate::services::view::ViewSnapshot;

pub const DASHBOARD_PATH: &str = "/frontend/";
pub const RELOAD_PATH: &str = "/frontend/reload";

const STYLESHEET: &str = r#"
body { margin: 0; padding: 24px; background: #f6f7fb; font-family: Arial, sans-serif; color: #111; }
header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 12px; }
header h1 { margin: 0; font-size: 22px; }
.meta { font-size: 13px; color: #555; margin-bottom: 8px; }
pre#summary { background: #fff; border: 1px solid #eee; border-radius: 10px; padding: 12px; font-size: 12px; white-space: pre-wrap; }
.empty { padding: 24px; text-align: center; color: #777; }
.hidden { display: none; }
#cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(360px, 1fr)); gap: 16px; }
.card { background: #fff; border-radius: 14px; padding: 18px; box-shadow: 0 2px 10px rgba(0,0,0,.06); }
.card img.hero { width: 100%; border-radius: 10px; object-fit: cover; max-height: 200px; }
.cardTop { display: flex; justify-content: space-between; align-items: baseline; gap: 8px; }
.badge { font-size: 11px; background: #111; color: #fff; border-radius: 8px; padding: 2px 8px; }
.kv { font-size: 14px; line-height: 1.6; margin: 8px 0; }
.box { border: 1px solid #eee; border-radius: 10px; padding: 10px; margin-top: 10px; }
.boxTitle { font-size: 12px; color: #777; margin-bottom: 4px; }
.boxBody { white-space: pre-wrap; font-size: 14px; }
.share { display: inline-block; margin-top: 8px; font-size: 13px; }
"#;

/// Full dashboard document for `view`.
pub fn render_shell(view: &ViewSnapshot) -> Markup {
    let reload_target = SafeUrl::parse(RELOAD_PATH).unwrap_or_else(SafeUrl::placeholder);

    let head = Element::new("head")
        .child(Element::void("meta").attr("charset", "utf-8"))
        .child(Element::new("title").text("Event Draft Review"))
        .child(Element::new("style").child(Markup::from_static(STYLESHEET)));

    let header = Element::new("header")
        .child(Element::new("h1").text("Event Draft Review"))
        .child(
            Element::new("form")
                .attr("method", "post")
                .action(&reload_target)
                .child(
                    Element::new("button")
                        .attr("id", "btnReload")
                        .attr("type", "submit")
                        .text("Reload"),
                ),
        );

    let empty_class = if view.empty_visible { "empty" } else { "empty hidden" };

    let body = Element::new("body")
        .child(header)
        .child(Element::new("div").attr("id", "meta").class("meta").text(view.meta.as_str()))
        .child(Element::new("pre").attr("id", "summary").text(view.summary.as_str()))
        .child(
            Element::new("div")
                .attr("id", "empty")
                .class(empty_class)
                .text("No drafted items to review."),
        )
        .child(
            Element::new("div")
                .attr("id", "cards")
                .child(view.cards_markup.clone()),
        );

    let html = Element::new("html").attr("lang", "en").child(head).child(body);

    Markup::join(
        vec![Markup::from_static("<!doctype html>"), html.render()],
        "\n",
    )
}
