use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entity_store::{is_present, Entity};

// ============================================================================
// Notification Value Objects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub content: String,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub fn unread(content: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            content: content.into(),
            date,
            read: false,
        }
    }

    pub fn mark_read(self) -> Self {
        Self { read: true, ..self }
    }
}

impl Entity for Notification {
    const KIND: &'static str = "notification";

    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![("content", is_present(&self.content))]
    }
}
