use crate::entity_store::{RecordId, StoreError};

// ============================================================================
// Agent Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Photo URL cannot be empty")]
    EmptyPhoto,

    #[error("Agent {agent_id} already has {limit} photos")]
    PhotoLimitReached { agent_id: RecordId, limit: usize },

    #[error("Invalid age: {0}")]
    InvalidAge(String),

    #[error("Unknown profile field: {0}")]
    UnknownField(String),
}
