use crate::entity_store::{RecordId, StoreError};

// ============================================================================
// Evaluation Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Client satisfaction must be between 0 and 5, got {0}")]
    InvalidSatisfaction(u8),

    #[error("Invalid month {0:?}, expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Event {0} does not exist")]
    UnknownEvent(RecordId),

    #[error("Event {0} already has a performance record")]
    DuplicatePerformance(RecordId),

    #[error("Revenue cannot be negative: {0}")]
    NegativeRevenue(f64),
}
