#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use serde_json::{json, Value};
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Delta document as written by the change-detection step.
pub fn delta_doc(run_at: &str) -> Value {
    json!({
        "summary": {
            "run_at": run_at,
            "current_count": 4,
            "previous_count": 2,
            "new": 2,
            "updated": 1,
            "skipped_closed": 1
        },
        "items": [
            {"change_type": "NEW", "event_id": "evt-1"},
            {"change_type": "UPDATED", "event_id": "evt-2"}
        ]
    })
}

/// Drafted item for an event titled `title`.
pub fn drafted_item(id: &str, title: &str) -> Value {
    json!({
        "event_id": id,
        "change_type": "NEW",
        "generated_at": "2026-10-19T09:05:00+08:00",
        "draft": {
            "subject": format!("Invitation: {}", title),
            "email_blurb": format!("Join us for {}.", title),
            "whatsapp_text": format!("{} - register now & bring a friend", title)
        },
        "event": {
            "event_id": id,
            "event": {
                "title": title,
                "location": "SCCCI Auditorium",
                "status": "Open",
                "datetime": {"date_range": "12 Nov 2026", "time_range": "2pm - 5pm"}
            },
            "registration": {"signup_link": format!("https://events.example.org/{}", id)},
            "media": {"images": {"items": [{"url": format!("https://img.example.org/{}.png", id)}]}}
        },
        "email_preview_path": format!("out/emails/{}.html", id)
    })
}

/// Item the drafting engine failed on.
pub fn failed_item(id: &str) -> Value {
    json!({
        "event_id": id,
        "change_type": "UPDATED",
        "generated_at": "2026-10-19T09:05:00+08:00",
        "error": "Gemini response did not contain JSON",
        "event": {"event": {"title": "Broken"}}
    })
}

pub fn drafts_doc(items: Vec<Value>) -> Value {
    json!({
        "summary": {"run_at": "2026-10-19T09:05:00+08:00", "input_items": items.len()},
        "items": items
    })
}

/// Write `body` to `root/rel`, creating directories.
pub fn write_file(root: &Path, rel: &str, body: &str) {
    let full = root.join(rel);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(full, body).expect("write fixture");
}

/// Data root with both documents in their default locations.
pub fn data_root(delta: &Value, drafts: &Value) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "data/events_delta.json", &delta.to_string());
    write_file(dir.path(), "out/drafts.json", &drafts.to_string());
    dir
}
