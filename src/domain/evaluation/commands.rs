use crate::entity_store::RecordId;

use super::value_objects::{EventPerformance, Satisfaction};

// ============================================================================
// Evaluation Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum EvaluationCommand {
    /// Record the results of an event; one record per event
    Record {
        performance: EventPerformance,
    },
    Revise {
        performance_id: RecordId,
        revenue: f64,
        products_sold: u32,
        client_satisfaction: Satisfaction,
    },
    Remove {
        performance_id: RecordId,
    },
}
