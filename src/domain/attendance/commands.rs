use crate::entity_store::RecordId;

use super::value_objects::AttendanceEntry;

// ============================================================================
// Attendance Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum AttendanceCommand {
    Declare { entry: AttendanceEntry },
    Validate { entry_id: RecordId },
    Refuse { entry_id: RecordId },
}
