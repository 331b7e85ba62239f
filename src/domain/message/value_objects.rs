use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entity_store::{is_present, Entity};

// ============================================================================
// Message Value Objects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub content: String,
    #[serde(alias = "date")]
    pub sent_at: NaiveDateTime,
}

impl Message {
    pub fn involves(&self, peer: &str) -> bool {
        self.from == peer || self.to == peer
    }
}

impl Entity for Message {
    const KIND: &'static str = "message";

    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("to", is_present(&self.to)),
            ("content", is_present(&self.content)),
        ]
    }
}
