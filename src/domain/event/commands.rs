use crate::entity_store::RecordId;

use super::value_objects::Event;

// ============================================================================
// Event Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum EventCommand {
    Schedule {
        event: Event,
    },
    Cancel {
        event_id: RecordId,
    },
    AssignAgent {
        event_id: RecordId,
        agent_name: String,
    },
    UnassignAgent {
        event_id: RecordId,
        agent_name: String,
    },
}
