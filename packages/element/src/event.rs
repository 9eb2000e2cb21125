//! Outward events
//!
//! The only channel from the element back to the host framework. Event
//! details serialize to the JSON objects the host decodes:
//!
//! ```text
//! caret  {"activeFormats": ["b", "p"], "sourceId": "note-1"}
//! draft  {"draft": "<p>..</p>",        "sourceId": "note-1"}
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaretDetail {
    pub active_formats: Vec<String>,
    pub source_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftDetail {
    pub draft: String,
    pub source_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "lowercase")]
pub enum OutwardEvent {
    Caret(CaretDetail),
    Draft(DraftDetail),
}

impl OutwardEvent {
    pub fn caret(active_formats: Vec<String>, source_id: impl Into<String>) -> Self {
        OutwardEvent::Caret(CaretDetail {
            active_formats,
            source_id: source_id.into(),
        })
    }

    pub fn draft(draft: impl Into<String>, source_id: impl Into<String>) -> Self {
        OutwardEvent::Draft(DraftDetail {
            draft: draft.into(),
            source_id: source_id.into(),
        })
    }

    /// Custom event type name
    pub fn name(&self) -> &'static str {
        match self {
            OutwardEvent::Caret(_) => "caret",
            OutwardEvent::Draft(_) => "draft",
        }
    }

    pub fn source_id(&self) -> &str {
        match self {
            OutwardEvent::Caret(detail) => &detail.source_id,
            OutwardEvent::Draft(detail) => &detail.source_id,
        }
    }

    /// Event detail as a JSON value (without the type tag)
    pub fn detail(&self) -> serde_json::Value {
        let detail = match self {
            OutwardEvent::Caret(detail) => serde_json::to_value(detail),
            OutwardEvent::Draft(detail) => serde_json::to_value(detail),
        };
        // Both detail structs are plain strings and string lists
        detail.unwrap_or(serde_json::Value::Null)
    }

    pub fn detail_json(&self) -> String {
        self.detail().to_string()
    }
}
