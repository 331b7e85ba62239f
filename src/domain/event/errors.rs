use crate::entity_store::StoreError;

// ============================================================================
// Event Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Agent name cannot be empty")]
    EmptyAgentName,
}
