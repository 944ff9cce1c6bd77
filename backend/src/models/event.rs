//! Event snapshots as published by the feed tracker.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// Core description of one event at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSnapshot {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// "Open", "Closed", ... as scraped; informational only
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub datetime: EventDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDateTime {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub signup_link: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    /// Ordered image list. Accepts a bare array or the `{ "items": [...] }`
    /// wrapper the feed tracker writes.
    #[serde(default, deserialize_with = "images")]
    pub images: Vec<Image>,
}

impl Media {
    /// URL of the first image, if there is one and it carries a URL.
    pub fn first_image_url(&self) -> Option<&str> {
        self.images
            .first()
            .and_then(|img| img.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

fn images<'de, D>(deserializer: D) -> Result<Vec<Image>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let list = match value {
        Value::Object(mut map) => map.remove("items").unwrap_or(Value::Null),
        other => other,
    };
    Ok(lenient::seq_from_value(list))
}

/// One tracked event as it appears in the delta and drafts documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub event: EventSnapshot,
    #[serde(default, deserialize_with = "lenient::object")]
    pub registration: Registration,
    #[serde(default, deserialize_with = "lenient::object")]
    pub media: Media,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub description_preview: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> EventRecord {
        lenient::object_from_value(value)
    }

    #[test]
    fn test_full_record() {
        let rec = record(json!({
            "event_id": "evt-1",
            "event": {
                "title": "Trade Mission",
                "location": "SCCCI Hall",
                "status": "Open",
                "datetime": {"date_range": "1 Mar 2026", "time_range": "9am - 5pm"}
            },
            "registration": {"signup_link": "https://example.org/r", "provider": "Eventbrite"},
            "media": {"images": {"items": [{"url": "https://img/1.png"}, {"url": "https://img/2.png"}]}}
        }));
        assert_eq!(rec.event_id.as_deref(), Some("evt-1"));
        assert_eq!(rec.event.title.as_deref(), Some("Trade Mission"));
        assert_eq!(rec.event.datetime.time_range.as_deref(), Some("9am - 5pm"));
        assert_eq!(rec.registration.signup_link.as_deref(), Some("https://example.org/r"));
        assert_eq!(rec.media.images.len(), 2);
        assert_eq!(rec.media.first_image_url(), Some("https://img/1.png"));
    }

    #[test]
    fn test_images_as_plain_array() {
        let rec = record(json!({"media": {"images": [{"url": "a.png"}]}}));
        assert_eq!(rec.media.first_image_url(), Some("a.png"));
    }

    #[test]
    fn test_missing_and_mistyped_sub_objects() {
        let rec = record(json!({"event": "not an object", "media": 5, "registration": null}));
        assert_eq!(rec.event, EventSnapshot::default());
        assert!(rec.media.images.is_empty());
        assert_eq!(rec.media.first_image_url(), None);
        assert_eq!(rec.registration, Registration::default());
    }

    #[test]
    fn test_first_image_without_url() {
        let rec = record(json!({"media": {"images": [{}, {"url": "second.png"}]}}));
        assert_eq!(rec.media.first_image_url(), None);
    }
}
