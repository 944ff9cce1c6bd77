//! Assembles the full dashboard page from the two documents.

use crate::markup::Markup;
use crate::models::{DeltaDocument, DraftsDocument};
use crate::services::card::{render_card, Card};

/// Separator placed between rendered cards.
const CARD_SEPARATOR: &str = "\n";

/// One fully computed view of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    /// Status line: run time of the delta and the drafts item count
    pub meta: String,
    /// Pretty-printed delta summary
    pub summary: String,
    /// Cards for drafted items, in document order
    pub cards: Vec<Card>,
    /// Concatenated card markup
    pub markup: Markup,
}

impl DashboardPage {
    pub fn build(delta: &DeltaDocument, drafts: &DraftsDocument) -> Self {
        for item in drafts.items.iter().filter(|item| !item.has_draft()) {
            log::debug!(
                "Skipping undrafted item {:?} ({:?}): {}",
                item.event_id,
                item.change_type,
                item.error.as_deref().unwrap_or("no draft")
            );
        }

        let cards: Vec<Card> = drafts.drafted().map(Card::from_item).collect();
        let markup = render_cards(&cards);

        Self {
            meta: status_line(delta, drafts),
            summary: delta.summary_text(),
            cards,
            markup,
        }
    }

    /// True when no item had a draft; the empty-state indicator is shown.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// `run_at: <run_at> | items: <count>`; the count covers every drafts item,
/// drafted or not.
pub fn status_line(delta: &DeltaDocument, drafts: &DraftsDocument) -> String {
    format!(
        "run_at: {} | items: {}",
        delta.run_at().unwrap_or("-"),
        drafts.items.len()
    )
}

pub fn render_cards(cards: &[Card]) -> Markup {
    Markup::join(cards.iter().map(render_card), CARD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn delta() -> DeltaDocument {
        DeltaDocument::from_value(json!({
            "summary": {"run_at": "2026-10-19T09:00:00+08:00", "new": 2, "updated": 1},
            "items": []
        }))
    }

    fn drafts() -> DraftsDocument {
        DraftsDocument::from_value(json!({
            "items": [
                {"event_id": "a", "draft": {"subject": "A"}, "event": {"event": {"title": "First"}}},
                {"event_id": "b", "error": "quota"},
                {"event_id": "c", "draft": {"subject": "C"}, "event": {"event": {"title": "Third"}}},
                {"event_id": "d", "draft": null},
                {"event_id": "e", "draft": {"subject": "E"}, "event": {"event": {"title": "Fifth"}}}
            ]
        }))
    }

    #[test]
    fn test_filter_is_exact_and_ordered() {
        let page = DashboardPage::build(&delta(), &drafts());
        let titles: Vec<&str> = page.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Third", "Fifth"]);
        assert_eq!(page.markup.as_str().matches("<div class=\"card\">").count(), 3);
        let first = page.markup.as_str().find("First").unwrap();
        let third = page.markup.as_str().find("Third").unwrap();
        let fifth = page.markup.as_str().find("Fifth").unwrap();
        assert!(first < third && third < fifth);
        assert!(!page.is_empty());
    }

    #[test]
    fn test_status_line_counts_all_items() {
        let page = DashboardPage::build(&delta(), &drafts());
        assert_eq!(page.meta, "run_at: 2026-10-19T09:00:00+08:00 | items: 5");
    }

    #[test]
    fn test_status_line_defaults() {
        let page = DashboardPage::build(&DeltaDocument::default(), &DraftsDocument::default());
        assert_eq!(page.meta, "run_at: - | items: 0");
        assert_eq!(page.summary, "{}");
        assert!(page.is_empty());
        assert!(page.markup.is_empty());
    }

    #[test]
    fn test_no_drafted_items_is_empty() {
        let drafts = DraftsDocument::from_value(json!({"items": [{"error": "x"}, {"draft": null}]}));
        let page = DashboardPage::build(&delta(), &drafts);
        assert!(page.is_empty());
        assert!(page.markup.is_empty());
        assert_eq!(page.meta, "run_at: 2026-10-19T09:00:00+08:00 | items: 2");
    }

    #[test]
    fn test_summary_is_pretty_json() {
        let page = DashboardPage::build(&delta(), &DraftsDocument::default());
        assert_eq!(
            page.summary,
            "{\n  \"run_at\": \"2026-10-19T09:00:00+08:00\",\n  \"new\": 2,\n  \"updated\": 1\n}"
        );
    }
}
