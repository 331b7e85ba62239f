use crate::entity_store::{EntityStore, Record, StoreError};

use super::commands::AttendanceCommand;
use super::value_objects::{AttendanceEntry, AttendanceStatus};

// ============================================================================
// Attendance Command Handler
// ============================================================================
//
// Review decisions can be revised: validating a refused entry is allowed,
// matching how the review table behaves.
//
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct AttendanceCommandHandler {
    store: EntityStore<AttendanceEntry>,
}

impl AttendanceCommandHandler {
    pub fn new(store: EntityStore<AttendanceEntry>) -> Self {
        Self { store }
    }

    pub fn handle(
        &mut self,
        command: AttendanceCommand,
    ) -> Result<Record<AttendanceEntry>, StoreError> {
        match command {
            AttendanceCommand::Declare { entry } => self.store.create(entry),
            AttendanceCommand::Validate { entry_id } => self
                .store
                .patch(entry_id, |e| e.with_status(AttendanceStatus::Validated)),
            AttendanceCommand::Refuse { entry_id } => self
                .store
                .patch(entry_id, |e| e.with_status(AttendanceStatus::Refused)),
        }
    }

    /// Entries still awaiting a decision, in display order
    pub fn pending(&self) -> Vec<Record<AttendanceEntry>> {
        self.store
            .iter()
            .filter(|r| r.fields.status == AttendanceStatus::Pending)
            .cloned()
            .collect()
    }

    pub fn list(&self) -> Vec<Record<AttendanceEntry>> {
        self.store.list()
    }

    pub fn store(&self) -> &EntityStore<AttendanceEntry> {
        &self.store
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
