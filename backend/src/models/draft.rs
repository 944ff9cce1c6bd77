//! The drafting engine's output: generated copy paired with its source event.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::event::EventRecord;
use super::lenient;

/// Generated promotional copy for one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub email_blurb: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub whatsapp_text: Option<String>,
}

/// One entry of the drafts document.
///
/// `draft` is absent when drafting failed for the event; `error` then usually
/// carries the engine's message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftItem {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub event: EventRecord,
    #[serde(default, deserialize_with = "lenient::optional_object", skip_serializing_if = "Option::is_none")]
    pub draft: Option<Draft>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub email_preview_path: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DraftItem {
    pub fn has_draft(&self) -> bool {
        self.draft.is_some()
    }
}

/// The whole drafts document (`out/drafts.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftsDocument {
    /// Drafting run metadata, kept verbatim.
    #[serde(default)]
    pub summary: Value,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub items: Vec<DraftItem>,
}

impl DraftsDocument {
    /// Parse a loaded document. Anything that is not a JSON object is an
    /// empty document.
    pub fn from_value(value: Value) -> Self {
        lenient::object_from_value(value)
    }

    /// Items whose drafting succeeded, in document order.
    pub fn drafted(&self) -> impl Iterator<Item = &DraftItem> {
        self.items.iter().filter(|item| item.has_draft())
    }
}
