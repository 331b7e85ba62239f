use crate::entity_store::RecordId;

use super::value_objects::PayrollEntry;

// ============================================================================
// Payroll Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum PayrollCommand {
    Record {
        entry: PayrollEntry,
    },
    /// Correct the days and amount of an existing entry
    Adjust {
        entry_id: RecordId,
        days_worked: u32,
        amount: f64,
    },
    Remove {
        entry_id: RecordId,
    },
}
