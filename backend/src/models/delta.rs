//! The change-detection document (`data/events_delta.json`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// Run metadata of a delta computation.
///
/// Only `run_at` is interpreted; the rest is displayed as-is, so the raw
/// value is kept alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct DeltaSummary {
    pub run_at: Option<String>,
    raw: Value,
}

impl DeltaSummary {
    /// Two-space indented rendering of the raw summary.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

impl From<Value> for DeltaSummary {
    fn from(raw: Value) -> Self {
        let run_at = raw.get("run_at").and_then(lenient::value_to_text);
        Self { run_at, raw }
    }
}

impl From<DeltaSummary> for Value {
    fn from(summary: DeltaSummary) -> Self {
        summary.raw
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<DeltaSummary>,
    /// Changed events; opaque to the dashboard.
    #[serde(default)]
    pub items: Value,
}

impl DeltaDocument {
    pub fn from_value(value: Value) -> Self {
        lenient::object_from_value(value)
    }

    /// `run_at` of the summary, when present and non-empty.
    pub fn run_at(&self) -> Option<&str> {
        self.summary
            .as_ref()
            .and_then(|s| s.run_at.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Pretty summary text; `{}` when the document has no summary.
    pub fn summary_text(&self) -> String {
        match &self.summary {
            Some(summary) => summary.pretty(),
            None => "{}".to_string(),
        }
    }
}
