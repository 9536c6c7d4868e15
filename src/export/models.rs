use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AnalysisError;

/// One exported chat file (`message_<n>.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatExport {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Participant {
    pub name: String,
}

/// A single exported message
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    #[serde(rename = "sender_name")]
    pub sender: String,
    /// Absent for photos, stickers, calls and the like
    #[serde(rename = "content", default)]
    pub body: Option<String>,
    pub timestamp_ms: i64,
}

impl Message {
    pub fn new(sender: impl Into<String>, body: Option<&str>, timestamp_ms: i64) -> Self {
        Self {
            sender: sender.into(),
            body: body.map(str::to_string),
            timestamp_ms,
        }
    }

    /// Decode the millisecond timestamp
    pub fn sent_at(&self) -> Result<DateTime<Utc>, AnalysisError> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
            .ok_or(AnalysisError::InvalidTimestamp(self.timestamp_ms))
    }
}
