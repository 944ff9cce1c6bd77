//! Card display model: extraction from a draft item and HTML rendering.

use serde::Serialize;

use crate::markup::{encode_component, Element, Markup, SafeUrl};
use crate::models::DraftItem;

pub const UNTITLED: &str = "(Untitled Event)";
pub const NO_SUBJECT: &str = "(no subject)";
pub const NO_BLURB: &str = "(no email blurb)";
pub const NO_WHATSAPP: &str = "(no whatsapp text)";
pub const NO_VALUE: &str = "-";

/// Email previews live in the sibling `out/` directory of the dashboard page.
pub const PREVIEW_PREFIX: &str = "../";

/// Share target; the WhatsApp text is appended URL-encoded.
pub const WHATSAPP_SHARE_BASE: &str = "https://wa.me/?text=";

/// Everything one card shows. Built right before rendering and dropped after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub subject: String,
    pub blurb: String,
    pub whatsapp: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub link: SafeUrl,
    pub preview: Option<SafeUrl>,
    pub hero_image: Option<SafeUrl>,
    pub change_type: String,
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

impl Card {
    /// Build the card for `item`. Total over any item shape: absent values
    /// show a placeholder, and URLs outside the scheme allow-list are
    /// replaced (`#` link) or dropped (image).
    pub fn from_item(item: &DraftItem) -> Card {
        let record = &item.event;
        let event = &record.event;
        let draft = item.draft.clone().unwrap_or_default();

        let link = match record.registration.signup_link.as_deref().filter(|l| !l.is_empty()) {
            Some(raw) => SafeUrl::parse(raw).unwrap_or_else(|| {
                log::warn!("Rejected registration link for {:?}: {}", item.event_id, raw);
                SafeUrl::placeholder()
            }),
            None => SafeUrl::placeholder(),
        };

        let hero_image = record.media.first_image_url().and_then(|raw| {
            let url = SafeUrl::parse(raw);
            if url.is_none() {
                log::warn!("Rejected hero image for {:?}: {}", item.event_id, raw);
            }
            url
        });

        let preview = item
            .email_preview_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .and_then(preview_link);

        Card {
            title: or_placeholder(event.title.as_deref(), UNTITLED),
            subject: or_placeholder(draft.subject.as_deref(), NO_SUBJECT),
            blurb: or_placeholder(draft.email_blurb.as_deref(), NO_BLURB),
            whatsapp: or_placeholder(draft.whatsapp_text.as_deref(), NO_WHATSAPP),
            date: or_placeholder(event.datetime.date_range.as_deref(), NO_VALUE),
            time: or_placeholder(event.datetime.time_range.as_deref(), NO_VALUE),
            venue: or_placeholder(event.location.as_deref(), NO_VALUE),
            link,
            preview,
            hero_image,
            change_type: item.change_type.clone().unwrap_or_default(),
        }
    }

    /// WhatsApp share link carrying the URL-encoded message.
    pub fn share_url(&self) -> SafeUrl {
        let url = format!("{}{}", WHATSAPP_SHARE_BASE, encode_component(&self.whatsapp));
        SafeUrl::parse(&url).unwrap_or_else(SafeUrl::placeholder)
    }
}

/// `../<path>`, with Windows separators normalised. Absolute or scheme-bearing
/// paths are not previews of the output directory and are dropped.
fn preview_link(path: &str) -> Option<SafeUrl> {
    let path = path.replace('\\', "/");
    if path.starts_with('/') || path.contains(':') {
        log::warn!("Ignoring preview path outside the output directory: {}", path);
        return None;
    }
    SafeUrl::parse(&format!("{}{}", PREVIEW_PREFIX, path))
}

fn field(label: &str, value: &str) -> Element {
    Element::new("div")
        .child(Element::new("b").text(format!("{}:", label)))
        .text(format!(" {}", value))
}

fn text_box(title: &str, body: &str) -> Element {
    Element::new("div")
        .class("box")
        .child(Element::new("div").class("boxTitle").text(title))
        .child(Element::new("div").class("boxBody").text(body))
}

/// Render one card. Every text field is escaped by the builder.
pub fn render_card(card: &Card) -> Markup {
    let hero = card.hero_image.as_ref().map(|url| {
        Element::void("img")
            .class("hero")
            .src(url)
            .attr("alt", "")
            .attr("loading", "lazy")
    });

    let preview = card.preview.as_ref().map(|url| {
        Element::new("div")
            .child(Element::new("b").text("Email Preview:"))
            .text(" ")
            .child(
                Element::new("a")
                    .href(url)
                    .attr("target", "_blank")
                    .text("Open HTML"),
            )
    });

    let registration = Element::new("div")
        .child(Element::new("b").text("Link:"))
        .text(" ")
        .child(
            Element::new("a")
                .href(&card.link)
                .attr("target", "_blank")
                .attr("rel", "noreferrer")
                .text("Open registration"),
        );

    let share = Element::new("a")
        .class("share")
        .href(&card.share_url())
        .attr("target", "_blank")
        .attr("rel", "noreferrer")
        .text("Share on WhatsApp");

    Element::new("div")
        .class("card")
        .child_opt(hero)
        .child(
            Element::new("div")
                .class("cardTop")
                .child(Element::new("h3").text(card.title.as_str()))
                .child(Element::new("span").class("badge").text(card.change_type.as_str())),
        )
        .child(
            Element::new("div")
                .class("kv")
                .child(field("Subject", &card.subject))
                .child(field("Date", &card.date))
                .child(field("Time", &card.time))
                .child(field("Venue", &card.venue))
                .child(registration)
                .child_opt(preview),
        )
        .child(text_box("Email blurb", &card.blurb))
        .child(text_box("WhatsApp text", &card.whatsapp).child(share))
        .render()
}
