use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity_store::{is_present, Entity, RecordId};

// ============================================================================
// Attendance Value Objects
// ============================================================================

/// Review state of a declared presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    #[serde(alias = "En attente")]
    Pending,
    #[serde(alias = "Validée")]
    Validated,
    #[serde(alias = "Refusée")]
    Refused,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    #[serde(alias = "agentId")]
    pub agent_id: RecordId,
    #[serde(alias = "agentNom")]
    pub agent_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: AttendanceStatus,
}

impl AttendanceEntry {
    /// A freshly declared presence, awaiting review
    pub fn declared(agent_id: RecordId, agent_name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            agent_id,
            agent_name: agent_name.into(),
            date,
            status: AttendanceStatus::Pending,
        }
    }

    pub fn with_status(self, status: AttendanceStatus) -> Self {
        Self { status, ..self }
    }
}

impl Entity for AttendanceEntry {
    const KIND: &'static str = "attendance entry";

    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![("agent_name", is_present(&self.agent_name))]
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
