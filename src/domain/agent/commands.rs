use crate::entity_store::RecordId;

use super::value_objects::{Agent, ProfileField};

// ============================================================================
// Agent Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum AgentCommand {
    Register {
        agent: Agent,
    },
    Remove {
        agent_id: RecordId,
    },
    UpdateProfile {
        agent_id: RecordId,
        field: ProfileField,
        value: String,
    },
    AddPhoto {
        agent_id: RecordId,
        url: String,
    },
}
